//! Drives a controlled timespan dropdown the way a parent view would.
//!
//! Run with: `RUST_LOG=select_dropdown=debug cargo run --example timespan`

use std::sync::Arc;

use parking_lot::Mutex;
use select_dropdown::debug::ModelTreeDebug;
use select_dropdown::{SelectConfig, SelectDropdown};

const CONFIG: &str = r#"
id = "dropdown-timespan"
name = "timespan"
placeholder = "Select a timespan"

[[options]]
options = { day = "Day", week = "Week" }

[[options]]
group = "Long"
options = { month = "Month", year = "Year", decade = { text = "Decade", disabled = true } }
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base = SelectConfig::from_toml_str(CONFIG)?;
    let timespan = Arc::new(Mutex::new(None::<String>));

    let mut select = SelectDropdown::new(base.clone());
    println!("{}", ModelTreeDebug::new(select.model()));

    let parent = timespan.clone();
    select.signals.changed.connect(move |value: &String| {
        *parent.lock() = Some(value.clone());
    });

    for pick in ["month", "decade", "month", "year"] {
        select.pick(pick);

        // The parent feeds its value back on the next pass.
        let mut config = base.clone();
        config.value = timespan.lock().clone();
        select.set_config(config)?;

        let shown = select.display();
        println!(
            "picked {pick:<7} -> value {:?}, shows {:?}, form field {:?}",
            select.value(),
            shown.text,
            select.hidden_input().map(|input| input.value),
        );
    }

    Ok(())
}
