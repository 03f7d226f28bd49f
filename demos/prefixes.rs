//! Unit prefixes declared with computed sequences.
//!
//! cargo run --example prefixes
use ordered_enum::{Enum, EnumBuilder, Result};

fn binary_prefix() -> Result<Enum<u64>> {
    let mut builder = EnumBuilder::<u64, u32>::new().named("BinaryPrefix");
    // the zeroth power has no prefix
    builder.sequence_mut().next_with(|n| 1 << (10 * n))?;
    for name in ["KI", "MI", "GI", "TI", "PI", "EI"] {
        builder.auto(name)?;
    }
    Ok(builder.build())
}

fn metric_prefix() -> Result<Enum<f64>> {
    let mut builder = EnumBuilder::<f64, i32>::new().named("MetricPrefix");
    builder.auto_from_with("DECI", 1, |n| 10f64.powi(-n))?;
    builder.auto("CENTI")?.auto("MILLI")?;
    builder.auto_from("MICRO", 6)?;
    builder.auto_from("NANO", 9)?;
    builder.auto_from_with("DECA", 1, |n| 10f64.powi(*n))?;
    builder.auto("HECTO")?.auto("KILO")?;
    builder.auto_from("MEGA", 6)?;
    Ok(builder.build())
}

fn main() -> Result<()> {
    let binary = binary_prefix()?;
    let metric = metric_prefix()?;
    println!("{binary:#?}");
    println!("{metric:#?}");

    let bytes = 3 * binary.value("GI")?;
    println!("3 GiB = {bytes} bytes");
    println!("{}", metric.slice(["KILO", "MILLI"])?);
    Ok(())
}
