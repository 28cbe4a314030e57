use crate::options::ReportVariant;
use crate::stats::LengthStats;
use std::io::Write;

/// Shortest round-trip decimal form of `x`, never in exponent notation, always with a decimal
/// point (`4.0`, `3.3333333333333335`).
fn format_mean(x: f64) -> String {
    let mut s = x.to_string();
    if x.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}

/// Writes the summary block for `stats`.
pub fn write_summary(
    writer: &mut impl Write,
    stats: &LengthStats,
    variant: ReportVariant,
) -> std::io::Result<()> {
    writeln!(writer, "Mean value:{}", format_mean(stats.mean))?;
    writeln!(writer, "Median value:{}", stats.median)?;

    if variant == ReportVariant::Full {
        writeln!(writer, "Max value:{}", stats.max)?;
        writeln!(writer, "Min value:{}", stats.min)?;
        writeln!(writer, "N50:{}", stats.n50)?;
    }
    Ok(())
}
