use super::{destination::Destination, ids::DestinationId};

fn destination(
    id: i64,
    name: &str,
    description: &str,
    (latitude, longitude): (f64, f64),
    country: &str,
    image_url: &str,
) -> Destination {
    Destination {
        id: DestinationId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        latitude,
        longitude,
        country: country.to_owned(),
        image_url: image_url.to_owned(),
    }
}

/// The fixed ten-entry catalog written on first run and on self-heal.
pub fn seed_destinations() -> Vec<Destination> {
    vec![
        destination(
            1,
            "Paris",
            "The City of Light, known for the Eiffel Tower and art museums",
            (48.8566, 2.3522),
            "France",
            "https://images.unsplash.com/photo-1502602898657-3e91760cbb34",
        ),
        destination(
            2,
            "Tokyo",
            "A bustling metropolis blending tradition and modernity",
            (35.6762, 139.6503),
            "Japan",
            "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf",
        ),
        destination(
            3,
            "New York",
            "The Big Apple, famous for Times Square and Central Park",
            (40.7128, -74.0060),
            "USA",
            "https://images.unsplash.com/photo-1496442226666-8d4d0e62e6e9",
        ),
        destination(
            4,
            "London",
            "Historic city with Big Ben, Tower Bridge, and royal palaces",
            (51.5074, -0.1278),
            "UK",
            "https://images.unsplash.com/photo-1513635269975-59663e0ac1ad",
        ),
        destination(
            5,
            "Dubai",
            "Luxury destination with stunning architecture and beaches",
            (25.2048, 55.2708),
            "UAE",
            "https://images.unsplash.com/photo-1512453979798-5ea266f8880c",
        ),
        destination(
            6,
            "Rome",
            "Eternal City with ancient ruins and Renaissance art",
            (41.9028, 12.4964),
            "Italy",
            "https://images.unsplash.com/photo-1552832230-c0197dd311b5",
        ),
        destination(
            7,
            "Barcelona",
            "Vibrant city known for Gaudí architecture and beaches",
            (41.3851, 2.1734),
            "Spain",
            "https://images.unsplash.com/photo-1583422409516-2895a77efded",
        ),
        destination(
            8,
            "Sydney",
            "Beautiful harbor city with the iconic Opera House",
            (-33.8688, 151.2093),
            "Australia",
            "https://images.unsplash.com/photo-1506973035872-a4ec16b8e8d9",
        ),
        destination(
            9,
            "Bali",
            "Tropical paradise with temples, beaches, and rice terraces",
            (-8.3405, 115.0920),
            "Indonesia",
            "https://images.unsplash.com/photo-1537996194471-e657df975ab4",
        ),
        destination(
            10,
            "Maldives",
            "Island paradise with crystal-clear waters and luxury resorts",
            (3.2028, 73.2207),
            "Maldives",
            "https://images.unsplash.com/photo-1514282401047-d79a71a590e8",
        ),
    ]
}
