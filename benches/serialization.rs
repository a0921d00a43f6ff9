use chrono::{DateTime, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_jsnotation::{to_string, to_string_into, to_value, DbNull};

#[derive(Serialize, Clone)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Serialize, Clone)]
enum Status {
    Draft,
    Published,
}

#[derive(Serialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
    status: Status,
    #[serde(serialize_with = "serde_jsnotation::date::serialize")]
    updated: DateTime<Utc>,
    discontinued: Option<DbNull>,
}

#[derive(Serialize, Clone)]
struct NestedData {
    id: u32,
    metadata: Metadata,
    tags: Vec<String>,
}

#[derive(Serialize, Clone)]
struct Metadata {
    created: String,
    updated: String,
    version: u32,
}

fn sample_user() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        active: true,
    }
}

fn sample_products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product {}", i),
            price: 9.99 + f64::from(i),
            quantity: i,
            status: if i % 2 == 0 {
                Status::Draft
            } else {
                Status::Published
            },
            updated: Utc
                .timestamp_opt(1_700_000_000 + i64::from(i), 0)
                .unwrap(),
            discontinued: None,
        })
        .collect()
}

fn benchmark_serialize_simple(c: &mut Criterion) {
    let user = sample_user();

    c.bench_function("serialize_simple_struct", |b| {
        b.iter(|| to_string(black_box(&user)))
    });
}

fn benchmark_serialize_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_array");

    for size in [10, 50, 100, 500].iter() {
        let products = sample_products(*size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| to_string(black_box(&products)))
        });
    }
    group.finish();
}

fn benchmark_serialize_into_reused_buffer(c: &mut Criterion) {
    let products = sample_products(100);
    let mut buffer = String::with_capacity(16 * 1024);

    c.bench_function("serialize_into_reused_buffer", |b| {
        b.iter(|| {
            buffer.clear();
            to_string_into(&mut buffer, black_box(&products))
        })
    });
}

fn benchmark_serialize_nested(c: &mut Criterion) {
    let data = NestedData {
        id: 42,
        metadata: Metadata {
            created: "2023-01-01T00:00:00Z".to_string(),
            updated: "2023-12-31T23:59:59Z".to_string(),
            version: 3,
        },
        tags: vec![
            "important".to_string(),
            "verified".to_string(),
            "production".to_string(),
        ],
    };

    c.bench_function("serialize_nested_struct", |b| {
        b.iter(|| to_string(black_box(&data)))
    });
}

fn benchmark_string_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialize_strings");

    let short = "short";
    let medium = "This is a medium length string with some content";
    let long = "This is a very long string that contains a lot of text and might require more processing time";
    let escaped = "It's a \"quoted\"\n\ttext with\\escapes\0 in it";

    group.bench_function("short_string", |b| b.iter(|| to_string(black_box(&short))));

    group.bench_function("medium_string", |b| {
        b.iter(|| to_string(black_box(&medium)))
    });

    group.bench_function("long_string", |b| b.iter(|| to_string(black_box(&long))));

    group.bench_function("escaped_string", |b| {
        b.iter(|| to_string(black_box(&escaped)))
    });

    group.finish();
}

fn benchmark_primitive_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitive_array");

    let numbers: Vec<i32> = (0..100).collect();
    let bools: Vec<bool> = (0..100).map(|i| i % 2 == 0).collect();
    let floats: Vec<f64> = (0..100).map(|i| i as f64 * 1.5).collect();

    group.bench_function("serialize_integers", |b| {
        b.iter(|| to_string(black_box(&numbers)))
    });

    group.bench_function("serialize_booleans", |b| {
        b.iter(|| to_string(black_box(&bools)))
    });

    group.bench_function("serialize_floats", |b| {
        b.iter(|| to_string(black_box(&floats)))
    });

    group.finish();
}

fn benchmark_capture_value(c: &mut Criterion) {
    let products = sample_products(100);

    c.bench_function("capture_value", |b| {
        b.iter(|| to_value(black_box(&products)))
    });
}

fn benchmark_comparison_with_json(c: &mut Criterion) {
    let user = sample_user();

    let mut group = c.benchmark_group("comparison");

    group.bench_function("notation_serialize", |b| {
        b.iter(|| serde_jsnotation::to_string(black_box(&user)))
    });

    group.bench_function("json_serialize", |b| {
        b.iter(|| serde_json::to_string(black_box(&user)))
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_serialize_simple,
    benchmark_serialize_array,
    benchmark_serialize_into_reused_buffer,
    benchmark_serialize_nested,
    benchmark_string_serialization,
    benchmark_primitive_array,
    benchmark_capture_value,
    benchmark_comparison_with_json
);
criterion_main!(benches);
