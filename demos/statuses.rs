//! HTTP status classes as enums: dispatch, merging and defaults.
//!
//! cargo run --example statuses
use ordered_enum::{Enum, Fetch, Result};

fn main() -> Result<()> {
    let explicit = [("OK", 200), ("CREATED", 201)];
    let success = Enum::<i64>::define_with(Vec::<&str>::new(), explicit, |b| {
        b.constant("NO_CONTENT", 204)?;
        Ok(())
    })?;
    let redirect = Enum::<i64>::from_pairs([("MOVED_PERMANENTLY", 301), ("FOUND", 302)])?;
    let client_error = Enum::<i64>::from_pairs([("NOT_FOUND", 404), ("GONE", 410)])?;

    for status in [201, 302, 410, 500] {
        let class = match status {
            s if success.matches(&s) => "success",
            s if redirect.matches(&s) => "redirect",
            s if client_error.matches(&s) => "client error",
            _ => "unknown",
        };
        println!("{status}: {class}");
    }

    let known = success.merge([&redirect, &client_error]);
    println!("{known}");
    println!("{}", known.to_json()?);
    println!("attribute names: {:?}", known.to_attribute().keys().collect::<Vec<_>>());

    let teapot = known.fetch_with("IM_A_TEAPOT", Fetch::new().or_else(|key| {
        eprintln!("{key} is not a known status");
        418
    }))?;
    println!("teapot = {teapot}");
    println!("404 is {}", known.key(&404i64)?);
    Ok(())
}
