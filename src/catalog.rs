//! Fixed catalogs the synthetic dataset draws from.

/// A region facilities are scattered around.
/// `spread_deg` is the full width of the jitter box, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub name: &'static str,
    pub center_lat: f64,
    pub center_lon: f64,
    pub spread_deg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Industry {
    pub name: &'static str,
    pub products: &'static str,
}

pub const REGIONS: [Region; 10] = [
    Region { name: "Maharashtra", center_lat: 19.7515, center_lon: 75.7139, spread_deg: 4.0 },
    Region { name: "Gujarat", center_lat: 22.2587, center_lon: 71.1924, spread_deg: 3.5 },
    Region { name: "Tamil Nadu", center_lat: 11.1271, center_lon: 78.6569, spread_deg: 3.0 },
    Region { name: "Uttar Pradesh", center_lat: 26.8467, center_lon: 80.9462, spread_deg: 4.0 },
    Region { name: "West Bengal", center_lat: 22.9868, center_lon: 87.8550, spread_deg: 2.5 },
    Region { name: "Karnataka", center_lat: 15.3173, center_lon: 75.7139, spread_deg: 3.5 },
    Region { name: "Delhi", center_lat: 28.7041, center_lon: 77.1025, spread_deg: 0.5 },
    Region { name: "Rajasthan", center_lat: 27.0238, center_lon: 74.2179, spread_deg: 4.5 },
    Region { name: "Jharkhand", center_lat: 23.6102, center_lon: 85.2799, spread_deg: 2.5 },
    Region { name: "Odisha", center_lat: 20.9517, center_lon: 85.0985, spread_deg: 3.0 },
];

pub const INDUSTRIES: [Industry; 15] = [
    Industry { name: "Steel Plant", products: "Hot-rolled coils, billets, structural steel" },
    Industry { name: "Cement Factory", products: "Portland cement, clinker" },
    Industry { name: "Thermal Power Plant", products: "Electricity from coal combustion" },
    Industry { name: "Chemical Plant", products: "Industrial acids, solvents, alkalis" },
    Industry { name: "Oil Refinery", products: "Petrol, diesel, LPG, bitumen" },
    Industry { name: "Textile Mill", products: "Dyed fabrics, yarn, garments" },
    Industry { name: "Paper Mill", products: "Kraft paper, newsprint, pulp" },
    Industry { name: "Fertilizer Plant", products: "Urea, ammonia, DAP" },
    Industry { name: "Pharmaceutical Plant", products: "Bulk drugs, formulations, APIs" },
    Industry { name: "Automobile Factory", products: "Passenger vehicles, engine components" },
    Industry { name: "Aluminium Smelter", products: "Primary aluminium ingots, alloys" },
    Industry { name: "Brick Kiln", products: "Fired clay bricks" },
    Industry { name: "Sugar Mill", products: "Refined sugar, molasses, bagasse power" },
    Industry { name: "Tannery", products: "Finished leather, hides" },
    Industry { name: "Glass Factory", products: "Float glass, containers, fibreglass" },
];

pub const CONTROL_MEASURES: [&str; 8] = [
    "Electrostatic Precipitator",
    "Bag Filter",
    "Wet Scrubber",
    "Cyclone Separator",
    "Flue Gas Desulfurization",
    "Selective Catalytic Reduction",
    "Continuous Emission Monitoring",
    "Dust Suppression System",
];

pub fn region_by_name(name: &str) -> Option<&'static Region> {
    REGIONS.iter().find(|r| r.name == name)
}

pub fn industry_by_name(name: &str) -> Option<&'static Industry> {
    INDUSTRIES.iter().find(|i| i.name == name)
}
