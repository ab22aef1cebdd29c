//! Synthetic dataset generation for `gen-data` and the criterion bench

use crate::error::{BenchError, Result};
use serde_json::{json, Value};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the large document inside a data directory
pub const LARGE_FILE: &str = "large.json";

/// File name of the line file inside a data directory
pub const SMALL_FILE: &str = "one-json-per-line.txt";

/// Large document: one object holding `num_items` user records
pub fn large_document(num_items: usize) -> Value {
    let data: Vec<Value> = (0..num_items)
        .map(|i| {
            json!({
                "id": i,
                "uuid": format!("550e8400-e29b-41d4-a716-446655440{:03}", i % 1000),
                "name": format!("User {}", i),
                "email": format!("user{}@example.com", i),
                "score": i as f64 * 0.1,
                "active": i % 2 == 0,
                "metadata": {
                    "created": "2024-01-01",
                    "updated": "2024-01-02",
                    "version": i % 10
                },
                "tags": ["alpha", "beta", "gamma", "delta"]
            })
        })
        .collect();
    json!({ "data": data })
}

/// Small documents, one per line in the line file
pub fn small_documents(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "name": format!("Item {}", i),
                "price": i as f64 * 1.5,
                "active": i % 3 != 0,
                "scores": [95, 87, 92, i % 100],
                "address": {
                    "street": "123 Main St",
                    "city": "New York",
                    "zip": "10001"
                }
            })
        })
        .collect()
}

/// Render small documents as newline-delimited JSON
pub fn to_lines(docs: &[Value]) -> Result<String> {
    let mut out = String::new();
    for doc in docs {
        out.push_str(&serde_json::to_string(doc)?);
        out.push('\n');
    }
    Ok(out)
}

/// Write both dataset files into `dir`, returning their paths
pub fn write_datasets(dir: &Path, items: usize, lines: usize) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir).map_err(|e| BenchError::io(dir, e))?;

    let large_path = dir.join(LARGE_FILE);
    let large = serde_json::to_string(&large_document(items))?;
    std::fs::write(&large_path, large).map_err(|e| BenchError::io(&large_path, e))?;

    let small_path = dir.join(SMALL_FILE);
    let mut file =
        std::fs::File::create(&small_path).map_err(|e| BenchError::io(&small_path, e))?;
    file.write_all(to_lines(&small_documents(lines))?.as_bytes())
        .map_err(|e| BenchError::io(&small_path, e))?;

    Ok((large_path, small_path))
}
