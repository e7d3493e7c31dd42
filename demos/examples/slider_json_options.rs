// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Options from JSON.
//!
//! Feeds camelCase option objects (as a page would pass them) through the model and
//! prints the resulting state back as JSON.
//!
//! Run:
//! - `cargo run -p understory_slider_demos --example slider_json_options`

use std::rc::Rc;

use understory_dispatch::EventManager;
use understory_slider::{Model, Options, SliderEvent};

const INIT: &str = r#"{
    "min": 0,
    "max": 20,
    "step": 10,
    "range": true,
    "scale": { "type": "steps", "density": 15 }
}"#;

const UPDATES: &[&str] = &[
    r#"{ "min": 5, "tooltips": true }"#,
    r#"{ "scale": { "type": "set", "set": [50] } }"#,
    r#"{ "scale": null }"#,
    r#"{}"#,
];

fn main() -> Result<(), serde_json::Error> {
    let events = Rc::new(EventManager::new());
    for ev in SliderEvent::ALL {
        events.register_event(ev);
    }

    let init: Options = serde_json::from_str(INIT)?;
    let model = Model::with_options(events, &init);
    println!("== init ==");
    println!("{}", serde_json::to_string_pretty(&model.state())?);

    for raw in UPDATES {
        let options: Options = serde_json::from_str(raw)?;
        let fired = model.update_options(&options);
        let names: Vec<&str> = fired.iter().map(|e| e.as_str()).collect();
        println!("== {raw} ==");
        println!("  dispatched: {names:?}");
        println!("  state: {}", serde_json::to_string(&model.state())?);
    }
    Ok(())
}
