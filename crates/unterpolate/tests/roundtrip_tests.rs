/*
 * roundtrip_tests.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Round-trip tests for the forward and reverse dispatchers, covering the
 * template shapes as callers combine them.
 */

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use unterpolate::{Direction, Options, Template, TemplateError, derive, render};

fn opts() -> Options {
    Options::default()
}

#[test]
fn string_template_round_trips() {
    let template = Template::from(json!("{year}-{month}-{day}"));
    let data = json!({"year": "2019", "month": "10", "day": "01"});

    assert_eq!(
        derive(&template, &json!("2019-10-01"), &opts()).unwrap(),
        data
    );
    assert_eq!(render(&template, &data, &opts()), json!("2019-10-01"));
}

#[test]
fn array_template_round_trips() {
    let template = Template::from(json!([
        "{first.second}",
        "{second}",
        "third-{fourth.fifth}",
        "{first.first}",
    ]));
    let rendered = json!(["joe", "bill", "third-jim", ["tom", "dick", "harry"]]);
    let data = json!({
        "first": {"first": ["tom", "dick", "harry"], "second": "joe"},
        "fourth": {"fifth": "jim"},
        "second": "bill",
    });

    assert_eq!(derive(&template, &rendered, &opts()).unwrap(), data);
    assert_eq!(render(&template, &data, &opts()), rendered);
}

#[test]
fn transform_template_round_trips() {
    let template = Template::mapping([(
        "first",
        Template::transform(|value: &Value, options: &Options| match options.how {
            Some(Direction::Derive) => json!({"prop": value.as_f64().unwrap_or(0.0) / 2.0}),
            _ => {
                json!(value.get("prop").and_then(Value::as_f64).unwrap_or(0.0) * 2.0)
            }
        }),
    )]);

    assert_eq!(
        derive(&template, &json!({"first": 20}), &opts()).unwrap(),
        json!({"prop": 10.0})
    );
    assert_eq!(
        render(&template, &json!({"prop": 10}), &opts()),
        json!({"first": 20.0})
    );
}

#[test]
fn object_template_round_trips() {
    let template = Template::from(json!({
        "first": "{first.second}",
        "second": "{second}",
        "third": "{first.childA[0]}",
        "fourth": ["{a}", "b", "{c}"],
    }));
    let rendered = json!({
        "first": "joe",
        "second": "bill",
        "third": ["tom", "dick", "harry"],
        "fourth": ["jim", "b", "fred"],
    });
    let data = json!({
        "a": "jim",
        "c": "fred",
        "first": {"second": "joe", "childA": [["tom", "dick", "harry"]]},
        "second": "bill",
    });

    assert_eq!(derive(&template, &rendered, &opts()).unwrap(), data);
    assert_eq!(render(&template, &data, &opts()), rendered);
}

#[test]
fn full_placeholder_binds_whole_non_string_value() {
    let template = Template::from(json!("{first.first}"));
    let value = json!(["tom", "dick", "harry"]);

    // before unflattening the binding is keyed by the raw dotted token
    let flat = unterpolate::unmatch("{first.first}", &value, &opts()).unwrap();
    assert_eq!(flat.get("first.first"), Some(&value));

    assert_eq!(
        derive(&template, &value, &opts()).unwrap(),
        json!({"first": {"first": ["tom", "dick", "harry"]}})
    );
}

#[test]
fn full_placeholder_render_preserves_type() {
    let data = json!({"x": [1, 2, 3]});
    assert_eq!(
        render(&Template::from(json!("{x}")), &data, &opts()),
        json!([1, 2, 3])
    );
    assert_eq!(
        render(&Template::from(json!("{x}-y")), &data, &opts()),
        json!("1,2,3-y")
    );
}

#[test]
fn multi_placeholder_non_string_value_is_ambiguous() {
    let template = Template::from(json!("{joe}-{bill}"));
    let err = derive(&template, &json!(["first", "second"]), &opts()).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::AmbiguousUnmatch { placeholders: 2 }
    ));
}

#[test]
fn absent_values_do_not_raise() {
    let object = Template::from(json!({
        "days": "{days}",
        "minutes": "{minutes}",
        "seconds": "{seconds}",
    }));
    assert!(derive(&object, &Value::Null, &opts()).is_ok());

    let sequence = Template::from(json!(["joe", "{bill}"]));
    assert!(derive(&sequence, &Value::Null, &opts()).is_ok());

    let string = Template::from(json!("{fred}"));
    assert!(derive(&string, &Value::Null, &opts()).is_ok());
}

#[test]
fn custom_pattern_round_trips() {
    let options = opts().with_pattern(regex::Regex::new(r"<<(.+?)>>").unwrap());
    let template = Template::from(json!("<<year>>/<<month>>"));
    let data = json!({"year": "2019", "month": "10"});

    assert_eq!(render(&template, &data, &options), json!("2019/10"));
    assert_eq!(derive(&template, &json!("2019/10"), &options).unwrap(), data);
}
