//! Types for house system computation.

/// The 10 supported house division systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HouseSystem {
    /// Placidus: iterative semi-arc trisection (the default).
    #[default]
    Placidus,
    /// Koch: MC-based ascensional-difference division.
    Koch,
    /// Porphyry: trisect the four quadrant arcs on the ecliptic.
    Porphyry,
    /// Regiomontanus: 30-degree equator arcs projected to the ecliptic.
    Regiomontanus,
    /// Campanus: 30-degree prime vertical arcs projected to the ecliptic.
    Campanus,
    /// Equal: each house spans exactly 30 degrees from the Ascendant.
    Equal,
    /// Whole Sign: 30-degree houses from the start of the Ascendant's sign.
    WholeSign,
    /// Alcabitius: semi-arc division on the equator.
    Alcabitius,
    /// Morinus: equatorial points projected to the ecliptic, latitude-free.
    Morinus,
    /// Topocentric (Polich-Page): tangent-ratio pole heights.
    Topocentric,
}

/// All 10 house systems in enum order.
pub const ALL_HOUSE_SYSTEMS: [HouseSystem; 10] = [
    HouseSystem::Placidus,
    HouseSystem::Koch,
    HouseSystem::Porphyry,
    HouseSystem::Regiomontanus,
    HouseSystem::Campanus,
    HouseSystem::Equal,
    HouseSystem::WholeSign,
    HouseSystem::Alcabitius,
    HouseSystem::Morinus,
    HouseSystem::Topocentric,
];

impl HouseSystem {
    /// The single-letter system code.
    pub const fn code(self) -> char {
        match self {
            Self::Placidus => 'P',
            Self::Koch => 'K',
            Self::Porphyry => 'O',
            Self::Regiomontanus => 'R',
            Self::Campanus => 'C',
            Self::Equal => 'E',
            Self::WholeSign => 'W',
            Self::Alcabitius => 'B',
            Self::Morinus => 'M',
            Self::Topocentric => 'T',
        }
    }

    /// System for a code letter, case-insensitive.
    ///
    /// Unrecognized codes map to Placidus; callers that want to reject
    /// them should validate separately.
    pub const fn from_code(code: char) -> Self {
        match code.to_ascii_uppercase() {
            'K' => Self::Koch,
            'O' => Self::Porphyry,
            'R' => Self::Regiomontanus,
            'C' => Self::Campanus,
            'E' => Self::Equal,
            'W' => Self::WholeSign,
            'B' => Self::Alcabitius,
            'M' => Self::Morinus,
            'T' => Self::Topocentric,
            _ => Self::Placidus,
        }
    }

    /// All 10 defined house systems.
    pub const fn all() -> &'static [HouseSystem] {
        &ALL_HOUSE_SYSTEMS
    }
}

/// House cusps and axis points, all in ecliptic degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Houses {
    /// Cusp longitudes, 1-indexed: `cusps[1]` through `cusps[12]`.
    /// Index 0 is unused and always 0.
    pub cusps: [f64; 13],
    /// The Ascendant. For quadrant systems this equals `cusps[1]`;
    /// Whole Sign and Morinus cusps diverge from it.
    pub ascendant: f64,
    /// The Midheaven (MC).
    pub mc: f64,
    /// Apparent right ascension of the meridian, in degrees.
    pub armc: f64,
}

impl Houses {
    /// Cusp longitude for a house number 1–12.
    ///
    /// # Panics
    /// Panics if `house` is 0 or greater than 12.
    pub fn cusp(&self, house: usize) -> f64 {
        assert!((1..=12).contains(&house), "house number {house} out of 1..=12");
        self.cusps[house]
    }
}
