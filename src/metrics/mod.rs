use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Saturating tallies accumulated across a renderer's lifetime.
#[derive(Debug, Default, Clone)]
pub struct RenderMetrics {
    renders: u64,
    nodes_painted: u64,
    atoms_written: u64,
}

impl RenderMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_render(&mut self, nodes: usize, atoms: usize) {
        self.renders = self.renders.saturating_add(1);
        self.nodes_painted = self.nodes_painted.saturating_add(nodes as u64);
        self.atoms_written = self.atoms_written.saturating_add(atoms as u64);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            renders: self.renders,
            nodes_painted: self.nodes_painted,
            atoms_written: self.atoms_written,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub renders: u64,
    pub nodes_painted: u64,
    pub atoms_written: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(
            LogLevel::Info,
            target.to_string(),
            "render_metrics".to_string(),
            self.as_fields(),
        )
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("nodes_painted".to_string(), json!(self.nodes_painted));
        map.insert("atoms_written".to_string(), json!(self.atoms_written));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_renders() {
        let mut metrics = RenderMetrics::new();
        metrics.record_render(5, 12);
        metrics.record_render(1, 3);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.renders, 2);
        assert_eq!(snapshot.nodes_painted, 6);
        assert_eq!(snapshot.atoms_written, 15);

        let event = snapshot.to_log_event("render");
        assert_eq!(event.fields.get("renders"), Some(&json!(2)));
    }
}
