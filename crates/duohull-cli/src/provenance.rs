use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use duohull::HullCfg;

/// What produced an artifact: command parameters plus the engine config.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
    pub cfg: HullCfg,
}

impl Payload {
    pub fn new(command: &'static str, params: Value, cfg: HullCfg) -> Self {
        Self {
            command,
            params,
            cfg,
        }
    }
}

/// Provenance block for `artifact` (also printed by `report`).
#[track_caller]
pub fn document(outputs: &[&Path], payload: &Payload) -> Value {
    let callsite = Location::caller();
    json!({
        "code_rev": current_git_rev(),
        "engine_version": duohull::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "cfg": {
            "eps": payload.cfg.eps,
            "counter": format!("{:?}", payload.cfg.counter),
        },
        "params": payload.params,
        "outputs": outputs.iter().map(|p| p.to_string_lossy()).collect::<Vec<_>>()
    })
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: &Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    if let Some(parent) = provenance_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }
    let doc = document(&[artifact], payload);
    fs::write(&provenance_path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", provenance_path.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Ok(rev) = std::env::var("GIT_COMMIT") {
        if !rev.is_empty() {
            return rev;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/hull.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/hull.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_cfg_and_outputs() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("sweep.csv");
        fs::write(&artifact, "n\n").unwrap();
        let payload = Payload::new(
            "sweep",
            json!({"sizes": [8, 16]}),
            HullCfg::default(),
        );
        let prov_path = write_sidecar(&artifact, &payload).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "sweep");
        assert_eq!(parsed["cfg"]["counter"], "Hybrid");
    }
}
