/// Catálogo fijo de actividades que el backend reconoce por código.
/// Los diálogos de servicios y recursos pintan un checkbox por entrada.
pub const PREDEFINED_ACTIVITIES: &[(&str, &str)] = &[
    ("FOOTBALL", "Football"),
    ("CRICKET", "Cricket"),
    ("BOWLING", "Bowling"),
    ("PADEL", "Padel Ball"),
    ("BADMINTON", "Badminton"),
    ("TENNIS", "Tennis"),
    ("SWIMMING", "Swimming"),
    ("BASKETBALL", "Basketball"),
    ("ARCADE", "Arcade"),
    ("GYM", "Gym"),
    ("SPA", "Spa"),
    ("STUDIO", "Studio"),
    ("CONFERENCE", "Conference"),
    ("PARTY_HALL", "Party Hall"),
];

/// Serie de ejemplo para el gráfico de ingresos del detalle de admin,
/// a la espera de que el backend exponga la serie mensual real.
pub const SAMPLE_MONTHLY_REVENUE: &[(&str, u32)] = &[
    ("Jan", 45_000),
    ("Feb", 52_000),
    ("Mar", 48_000),
    ("Apr", 61_000),
    ("May", 55_000),
    ("Jun", 67_000),
];
