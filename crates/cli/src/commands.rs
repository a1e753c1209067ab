//! Subcommand implementations. Each returns the text to print on stdout.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::json;
use sift_core::{Config, ObjectType, QueueVariant};
use sift_filters::params::{parse_query, to_query_string};
use sift_filters::persist::{load_filter_state, save_filter_state, FileStore};
use sift_filters::registry::descriptors;
use sift_filters::{
    encode_filters, format_object_filters_for_api, parse_filters, refresh_filters,
    FilterDescriptor, FilterSet, FlatParams, ParamValue, ReferenceSnapshot,
};
use tracing::{debug, info, warn};

/// Everything a subcommand needs: the active table, references and state.
pub struct Workspace {
    pub object: ObjectType,
    pub queue: QueueVariant,
    pub descriptors: &'static [FilterDescriptor],
    pub references: ReferenceSnapshot,
    pub store: FileStore,
    pub state_key: String,
}

impl Workspace {
    pub fn open(
        config: &Config,
        object: Option<ObjectType>,
        queue: Option<QueueVariant>,
        references: Option<PathBuf>,
    ) -> Result<Self> {
        let object = object.unwrap_or(config.filters.default_object_type);
        let queue = queue.unwrap_or(config.filters.default_queue);
        let references = match references.or_else(|| config.filters.reference_data.clone()) {
            Some(path) => load_references(&path)?,
            None => {
                warn!("no reference data configured; reference-backed filters will not resolve");
                ReferenceSnapshot::new()
            }
        };
        info!(%object, %queue, "active filter table");

        Ok(Self {
            object,
            queue,
            descriptors: descriptors(object, queue),
            references,
            store: FileStore::new(&config.state.dir),
            state_key: config.state.key.clone(),
        })
    }
}

fn load_references(path: &Path) -> Result<ReferenceSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read reference data '{}'", path.display()))?;
    let snapshot = ReferenceSnapshot::from_json(&json)
        .with_context(|| format!("invalid reference data '{}'", path.display()))?;
    debug!(path = %path.display(), "loaded reference data");
    Ok(snapshot)
}

// ── Subcommands ─────────────────────────────────────────────────────

pub fn list_descriptors(ws: &Workspace) -> String {
    let mut out = format!("# {} / {}\n", ws.object, ws.queue);
    out.push_str(&format!(
        "{:<18} {:<17} {:<20} {:<22} {}\n",
        "NAME", "KIND", "LABEL", "NEGATED", "PROVIDER"
    ));
    for d in ws.descriptors {
        let provider = d
            .spec
            .reference()
            .map(|r| r.provider.to_string())
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:<18} {:<17} {:<20} {:<22} {}\n",
            d.name,
            d.kind(),
            d.label,
            d.negated_name(),
            provider
        ));
    }
    out
}

pub fn decode(ws: &Workspace, query: &str) -> Result<String> {
    let filters = parse_filters(&parse_query(query), ws.descriptors, &ws.references);
    Ok(serde_json::to_string_pretty(&filters)?)
}

pub fn encode(
    ws: &Workspace,
    path: &Path,
    limit: Option<u64>,
    offset: Option<u64>,
) -> Result<String> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read filter set '{}'", path.display()))?;
    let filters: FilterSet = serde_json::from_str(&json)
        .with_context(|| format!("invalid filter set '{}'", path.display()))?;

    let mut passthrough = FlatParams::new();
    if let Some(limit) = limit {
        passthrough.insert("limit".to_string(), ParamValue::Json(json!(limit)));
    }
    if let Some(offset) = offset {
        passthrough.insert("offset".to_string(), ParamValue::Json(json!(offset)));
    }

    let params = format_object_filters_for_api(ws.descriptors, &filters, &passthrough);
    Ok(to_query_string(&params))
}

pub fn roundtrip(ws: &Workspace, query: &str) -> String {
    let filters = parse_filters(&parse_query(query), ws.descriptors, &ws.references);
    to_query_string(&encode_filters(ws.descriptors, &filters))
}

pub fn save(ws: &Workspace, query: &str) -> Result<String> {
    let filters = parse_filters(&parse_query(query), ws.descriptors, &ws.references);
    let count = filters.len();

    let mut state = load_filter_state(&ws.store, &ws.state_key)?;
    state.set(ws.object, filters);
    save_filter_state(&ws.store, &ws.state_key, &state)
        .context("failed to save filter state")?;

    info!(object = %ws.object, fields = count, "saved filters");
    Ok(format!("saved {} filter field(s) for {}", count, ws.object))
}

pub fn show(ws: &Workspace) -> Result<String> {
    let state = load_filter_state(&ws.store, &ws.state_key)?;
    let Some(saved) = state.get(ws.object) else {
        debug!(object = %ws.object, "no saved filters");
        return Ok(String::new());
    };
    let filters = refresh_filters(ws.descriptors, saved, &ws.references);
    Ok(to_query_string(&encode_filters(ws.descriptors, &filters)))
}
