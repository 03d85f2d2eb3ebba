/// Repeatedly divide `value` by `step`, returning the scaled value and unit index.
fn scale(value: f64, step: f64, suffixes: &[&str]) -> Option<(f64, usize)> {
    let mut scaled = value;
    let mut unit = 0;
    while scaled >= step && unit < suffixes.len() - 1 {
        scaled /= step;
        unit += 1;
    }
    (unit > 0).then_some((scaled, unit))
}

/// Compact row count: `4.5K`, `2.3M`, `2.7B`.
pub fn format_numbers(n: usize) -> String {
    const SUFFIXES: [&str; 4] = ["", "K", "M", "B"];
    match scale(n as f64, 1000.0, &SUFFIXES) {
        Some((scaled, unit)) => format!("{:.1}{}", scaled, SUFFIXES[unit]),
        None => n.to_string(),
    }
}

/// Human-readable byte size with binary units.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    match scale(bytes as f64, 1024.0, &UNITS) {
        Some((scaled, unit)) => format!("{:.2} {}", scaled, UNITS[unit]),
        None => format!("{} B", bytes),
    }
}
