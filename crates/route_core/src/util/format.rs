use crate::constants::Weight;

/// Renders a distance for display: thousands-grouped with a `km` suffix,
/// or the literal `"No path"` for the infinite sentinel. Fractional
/// weights keep one rounded decimal.
pub fn format_distance(distance: Weight) -> String {
    if distance.is_infinite() {
        return "No path".to_string();
    }

    let rounded = (distance * 10.0).round() / 10.0;
    let whole = group_thousands(rounded.trunc() as u64);
    let tenths = ((rounded.fract() * 10.0).round() as u64) % 10;
    if tenths == 0 {
        format!("{} km", whole)
    } else {
        format!("{}.{} km", whole, tenths)
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
