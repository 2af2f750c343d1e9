//! The builtin stylized Japan dataset: five islands, nine cities, six
//! landmark attractions. Coordinates live in the map's own flat space.

use crate::{IslandOutline, Location, LocationKind, MapCatalog, rgb};

pub fn japan() -> MapCatalog {
    MapCatalog {
        locations: places(),
        islands: islands(),
    }
}

fn islands() -> Vec<IslandOutline> {
    vec![
        IslandOutline {
            name: "Hokkaido".into(),
            points: vec![
                [300.0, -60.0],
                [350.0, -20.0],
                [320.0, 20.0],
                [280.0, 40.0],
                [240.0, 20.0],
                [260.0, -30.0],
            ],
            color: rgb(0x9edc89),
            depth: 8.0,
            corner_radius: 12.0,
            lift: 0.4,
        },
        IslandOutline {
            name: "Honshu".into(),
            points: vec![
                [-260.0, -70.0],
                [-200.0, -50.0],
                [-120.0, -40.0],
                [0.0, -20.0],
                [100.0, -10.0],
                [170.0, 10.0],
                [200.0, 40.0],
                [160.0, 80.0],
                [80.0, 90.0],
                [10.0, 80.0],
                [-70.0, 70.0],
                [-130.0, 40.0],
                [-200.0, 0.0],
                [-260.0, -30.0],
            ],
            color: rgb(0x79c56d),
            depth: 10.0,
            corner_radius: 10.0,
            lift: 0.2,
        },
        IslandOutline {
            name: "Shikoku".into(),
            points: vec![
                [-120.0, -120.0],
                [-60.0, -110.0],
                [0.0, -115.0],
                [-10.0, -150.0],
                [-90.0, -155.0],
                [-140.0, -140.0],
            ],
            color: rgb(0x84cf79),
            depth: 7.0,
            corner_radius: 8.0,
            lift: 0.15,
        },
        IslandOutline {
            name: "Kyushu".into(),
            points: vec![
                [-260.0, -160.0],
                [-210.0, -150.0],
                [-160.0, -150.0],
                [-140.0, -190.0],
                [-200.0, -210.0],
                [-260.0, -195.0],
            ],
            color: rgb(0x8ad783),
            depth: 7.0,
            corner_radius: 8.0,
            lift: 0.12,
        },
        IslandOutline {
            name: "Okinawa".into(),
            points: vec![
                [-320.0, -260.0],
                [-300.0, -255.0],
                [-280.0, -270.0],
                [-300.0, -285.0],
            ],
            color: rgb(0x9adf8f),
            depth: 5.0,
            corner_radius: 6.0,
            lift: 0.1,
        },
    ]
}

fn places() -> Vec<Location> {
    let city = |name: &str, x: f64, y: f64, z: f64| Location {
        name: name.into(),
        kind: LocationKind::City,
        position: [x, y, z],
    };
    let attraction = |name: &str, x: f64, y: f64, z: f64| Location {
        name: name.into(),
        kind: LocationKind::Attraction,
        position: [x, y, z],
    };
    vec![
        city("Sapporo", 305.0, 6.0, 0.0),
        city("Tokyo", 120.0, 6.0, 20.0),
        city("Yokohama", 115.0, 6.0, 35.0),
        city("Nagoya", 60.0, 6.0, 40.0),
        city("Kyoto", -40.0, 6.0, 30.0),
        city("Osaka", -30.0, 6.0, 40.0),
        city("Nara", -20.0, 6.0, 55.0),
        city("Hiroshima", -160.0, 6.0, 30.0),
        city("Fukuoka", -210.0, 6.0, -165.0),
        attraction("Mount Fuji", 80.0, 10.0, 10.0),
        attraction("Tokyo Tower", 125.0, 10.0, 18.0),
        attraction("Fushimi Inari Torii", -44.0, 9.0, 24.0),
        attraction("Osaka Castle", -28.0, 9.0, 35.0),
        attraction("Itsukushima Torii", -170.0, 9.0, 36.0),
        attraction("Nara Park", -17.0, 9.0, 58.0),
    ]
}
