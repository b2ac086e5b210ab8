//! objkit demo
//!
//! Runs the rectangle, JSON and selector examples and prints the results.

use objkit::{CapabilitySet, Combinator, Config, from_json, rectangle, to_json};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting objkit demo v{}", objkit::VERSION);

    // Rectangle
    let r = rectangle(10.0, 20.0);
    println!("rectangle {}x{} has area {}", r.width, r.height, r.area());

    // JSON bridge
    let text = to_json(&r)?;
    println!("to_json: {}", text);

    let caps = CapabilitySet::named("Rectangle").with_method("getArea", |this, _args| {
        Ok(Value::from(this.require_number("width")? * this.require_number("height")?))
    });
    let parsed = from_json(caps, &text)?;
    println!("from_json(...).getArea() = {}", parsed.call("getArea", &[])?);

    // Selector builder
    let builder = config.selector_builder();
    let simple = builder.id("main")?.class("container")?.class("editable")?;
    println!("{}", simple);

    let link = builder.element("a")?.attr(r#"href$=".png""#)?.pseudo_class("focus")?;
    println!("{}", link);

    let combined = builder.combine(
        builder.element("div")?.id("main")?.class("container")?.class("draggable")?,
        Combinator::NextSibling,
        builder.combine(
            builder.element("table")?.id("data")?,
            Combinator::SubsequentSibling,
            builder.combine(
                builder.element("tr")?.pseudo_class("nth-of-type(even)")?,
                Combinator::Descendant,
                builder.element("td")?.pseudo_class("nth-of-type(even)")?,
            ),
        ),
    );
    println!("{}", combined);

    if let Err(e) = builder.id("main")?.element("a") {
        tracing::warn!("Rejected selector: {}", e);
    }

    Ok(())
}
