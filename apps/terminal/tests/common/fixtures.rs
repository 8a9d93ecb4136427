//! Dataset fixtures.

/// Two levels: a free-text card and a choice card, then one free-text card.
pub const TWO_LEVELS: &str = r#"{
    "0": [
        { "url": "img/cat.png", "phrase": "The | is blue", "type": "input", "answer": "cat" },
        { "url": "img/sky.png", "phrase": "Sky is |", "type": "select",
          "options": ["red", "blue", "green"], "answer": "blue" }
    ],
    "1": [
        { "url": "img/dog.png", "phrase": "A | barks", "type": "input", "answer": "dog" }
    ]
}"#;

/// One level whose only card uses a type the core does not support.
pub const UNSUPPORTED: &str = r#"{
    "0": [
        { "url": "img/x.png", "phrase": "Tick |", "type": "checkbox", "answer": "yes" }
    ]
}"#;

/// The sample dataset shipped with the host.
pub const SAMPLE: &str = include_str!("../../data/animals.json");
