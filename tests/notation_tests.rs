use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use num_bigint::BigInt;
use serde::Serialize;
use serde_jsnotation::date::{naive_to_epoch_millis, system_time_to_epoch_millis, to_epoch_millis};
use serde_jsnotation::{
    classify, escape, select_members, to_string, to_string_with_options, DbNull, EncodeOptions,
    Error, Kind, Timestamp, Value,
};
use std::collections::HashMap;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Serialize)]
enum Color {
    Red,
    Green,
}

#[derive(Serialize)]
struct Unit;

#[derive(Serialize)]
struct Account {
    id: u32,
    #[serde(rename = "owner")]
    owner_name: String,
    #[serde(skip_serializing)]
    secret: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<String>,
    #[serde(serialize_with = "serde_jsnotation::date::option::serialize")]
    closed: Option<DateTime<Utc>>,
}

#[test]
fn test_classification_order() {
    assert_eq!(classify(&()), Kind::Null);
    assert_eq!(classify(&Unit), Kind::Null);
    assert_eq!(classify(&false), Kind::Bool);
    assert_eq!(classify(&'c'), Kind::Character);
    assert_eq!(classify(&7u8), Kind::Number);
    assert_eq!(classify(&-1.5f32), Kind::Number);
    assert_eq!(classify(&Value::BigInt(BigInt::from(1))), Kind::Number);
    assert_eq!(classify(&None::<String>), Kind::Nullable);
    assert_eq!(classify(&Some("x")), Kind::Nullable);
    assert_eq!(classify(&Color::Green), Kind::Enum);
    assert_eq!(classify("text"), Kind::Text);
    assert_eq!(classify(&String::from("text")), Kind::Text);
    assert_eq!(classify(&Timestamp(Utc::now())), Kind::Temporal);
    assert_eq!(classify(&DbNull), Kind::SentinelNull);
    assert_eq!(classify(&[1, 2]), Kind::Sequence);
    assert_eq!(classify(&(1, "a")), Kind::Sequence);
    assert_eq!(classify(&HashMap::<String, i32>::new()), Kind::Composite);
}

#[test]
fn test_classification_of_composites() {
    let account = Account {
        id: 1,
        owner_name: "Kim".to_string(),
        secret: "hunter2".to_string(),
        note: None,
        closed: None,
    };
    assert_eq!(classify(&account), Kind::Composite);
    assert!(classify(&account).is_container());
    assert!(classify(&DbNull).is_null_like());
    assert_eq!(Kind::SentinelNull.to_string(), "sentinel-null");
}

#[test]
fn test_member_selection() {
    let account = Account {
        id: 42,
        owner_name: "Kim".to_string(),
        secret: "hunter2".to_string(),
        note: None,
        closed: None,
    };

    let members = select_members(&account).unwrap();
    let names: Vec<&str> = members.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["id", "owner", "closed"]);
    assert_eq!(members[0].1, Value::from(42));
    assert_eq!(members[2].1, Value::Null);
}

#[test]
fn test_member_selection_of_non_composites() {
    assert!(select_members(&5).unwrap().is_empty());
    assert!(select_members(&vec![1, 2]).unwrap().is_empty());
}

#[test]
fn test_account_encoding() {
    let closed = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let account = Account {
        id: 42,
        owner_name: "Kim".to_string(),
        secret: "hunter2".to_string(),
        note: Some("VIP".to_string()),
        closed: Some(closed),
    };

    let text = to_string(&account).unwrap();
    assert_eq!(
        text,
        format!(
            r#"{{"id":42,"owner":"Kim","note":"VIP","closed":new Date({})}}"#,
            closed.timestamp_millis()
        )
    );
    assert!(!text.contains("hunter2"));
}

#[test]
fn test_escape_table() {
    let cases = [
        ("\0", r"\0"),
        ("\u{8}", r"\b"),
        ("\t", r"\t"),
        ("\r", r"\r"),
        ("\n", r"\n"),
        ("\u{b}", r"\v"),
        ("\u{c}", r"\f"),
        ("\"", r#"\""#),
        ("'", r"\'"),
        ("\\", r"\\"),
    ];
    for (raw, escaped) in cases {
        assert_eq!(escape(raw), escaped, "escaping {:?}", raw);
    }
}

#[test]
fn test_escape_passes_other_characters_through() {
    assert_eq!(escape("naïve café ☕ </script>"), "naïve café ☕ </script>");
    assert_eq!(escape("\u{1}\u{7f}"), "\u{1}\u{7f}");
    assert_eq!(escape(""), "");
}

#[test]
fn test_escape_is_not_idempotent() {
    let once = escape("a'b");
    assert_eq!(once, r"a\'b");
    assert_eq!(escape(&once), r"a\\\'b");
}

#[test]
fn test_epoch_millis_truncation() {
    let epoch = Utc.timestamp_opt(0, 0).unwrap();
    assert_eq!(to_epoch_millis(&epoch), 0);

    let sub_milli = Utc.timestamp_opt(1, 999_999).unwrap();
    assert_eq!(to_epoch_millis(&sub_milli), 1000);

    // 0.5 ms before the epoch truncates toward zero.
    let before = Utc.timestamp_opt(-1, 999_500_000).unwrap();
    assert_eq!(to_epoch_millis(&before), 0);

    let before = Utc.timestamp_opt(-2, 500_000_000).unwrap();
    assert_eq!(to_epoch_millis(&before), -1500);
}

#[test]
fn test_epoch_millis_uses_the_instant() {
    let offset = FixedOffset::east_opt(5 * 3600).unwrap();
    let local = offset.with_ymd_and_hms(1970, 1, 1, 5, 0, 1).unwrap();
    assert_eq!(to_epoch_millis(&local), 1000);
    assert_eq!(to_string(&Timestamp(local)).unwrap(), "new Date(1000)");

    let naive = NaiveDate::from_ymd_opt(1970, 1, 1)
        .unwrap()
        .and_hms_milli_opt(0, 0, 2, 250)
        .unwrap();
    assert_eq!(naive_to_epoch_millis(&naive), 2250);

    let time = UNIX_EPOCH + Duration::from_millis(86_400_000);
    assert_eq!(system_time_to_epoch_millis(time), 86_400_000);
}

#[test]
fn test_empty_member_name_is_rejected() {
    #[derive(Serialize)]
    struct Nameless {
        #[serde(rename = "")]
        value: i32,
    }

    let err = to_string(&Nameless { value: 1 }).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[test]
fn test_depth_limit_can_be_disabled() {
    let mut deep = Value::from(0);
    for _ in 0..200 {
        deep = Value::Array(vec![deep]);
    }

    let text = to_string(&deep).unwrap();
    assert_eq!(text.len(), 401);
    assert!(text.starts_with("[[[") && text.ends_with("]]]"));

    let capped = EncodeOptions::new().with_max_depth(150);
    assert_eq!(
        to_string_with_options(&deep, capped.clone()).unwrap_err(),
        Error::DepthLimitExceeded { limit: 150 }
    );
    assert_eq!(
        to_string_with_options(&deep, capped.without_depth_limit()).unwrap(),
        text
    );
}

#[test]
fn test_date_map_keys_are_rejected() {
    let mut by_day = HashMap::new();
    by_day.insert(Timestamp(Utc.timestamp_opt(1, 0).unwrap()), 1);
    assert_eq!(
        to_string(&by_day).unwrap_err(),
        Error::KeyMustBeText(Kind::Temporal)
    );
}

#[test]
fn test_non_finite_floats() {
    assert_eq!(
        to_string(&[f64::NAN, f64::INFINITY, f64::NEG_INFINITY]).unwrap(),
        "[NaN,Infinity,-Infinity]"
    );
}

#[test]
fn test_wide_integers() {
    assert_eq!(
        to_string(&u128::MAX).unwrap(),
        "340282366920938463463374607431768211455"
    );
    let big: BigInt = "-123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        to_string(&Value::BigInt(big)).unwrap(),
        "-123456789012345678901234567890"
    );
}
