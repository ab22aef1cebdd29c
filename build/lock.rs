//! Cargo.lock lookup shared by the build script and its tests

use semver::{Version, VersionReq};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Lockfile {
    #[serde(default)]
    package: Vec<LockedPackage>,
}

#[derive(Debug, Deserialize)]
struct LockedPackage {
    name: String,
    version: Version,
}

/// Resolved version of `name`: the highest locked copy matching `req`,
/// otherwise the highest locked copy at all
pub fn locked_version(lock: &str, name: &str, req: &str) -> Result<Option<Version>, String> {
    let lockfile: Lockfile = toml::from_str(lock).map_err(|e| e.to_string())?;
    let req = VersionReq::parse(req).map_err(|e| e.to_string())?;

    let copies: Vec<&Version> = lockfile
        .package
        .iter()
        .filter(|pkg| pkg.name == name)
        .map(|pkg| &pkg.version)
        .collect();

    let matching = copies.iter().filter(|v| req.matches(v)).max();
    Ok(matching.or_else(|| copies.iter().max()).map(|v| (*v).clone()))
}
