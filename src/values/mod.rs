// src/values/mod.rs
//! The Prometheus values overlay kept next to the operator's shell.
//!
//! A missing file is generated from a fixed template. An existing file is
//! treated as opaque text: only the ingress host entry and the external-dns
//! hostname annotation are rewritten, every other byte is preserved.

use crate::error::Result;
use regex::{Captures, Regex};
use std::{fs, path::Path};

const HOSTS_PATTERN: &str =
    r"(?m)^([ \t]*(?:-[ \t]+)?hosts:)[ \t]*((?:[ \t]*\r?\n)+)([ \t]*)-[ \t][^\r\n]*";
const DNS_ANNOTATION_PATTERN: &str = r#"external-dns\.alpha\.kubernetes\.io/hostname: "[^\r\n]*""#;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValuesFileAction {
    Created,
    Updated,
    /// The file has neither a `hosts:` item nor an external-dns annotation.
    Unchanged,
}

/// Rewritten text and how many host entries it touched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    pub content: String,
    pub replaced: usize,
}

/// Default values: exporters bundled with the chart are off, three static
/// scrape jobs, no persistent volume, nginx ingress on `hostname`.
pub fn render_template(hostname: &str) -> String {
    format!(
        r#"prometheus-node-exporter:
  enabled: false
kube-state-metrics:
  enabled: false
alertmanager:
  enabled: false
serverFiles:
  prometheus.yml:
    scrape_configs:
      - job_name: prometheus
        static_configs:
          - targets:
              - localhost:9090
      - job_name: node-exporter
        static_configs:
          - targets:
              - kube-prometheus-stack-prometheus-node-exporter.monitoring:9100
      - job_name: nginx
        static_configs:
          - targets:
              - ingress-nginx-controller-metrics.ingress-nginx:10254
server:
  persistentVolume:
    enabled: false
  ingress:
    enabled: true
    ingressClassName: nginx
    hosts:
      - {hostname}
    annotations:
      external-dns.alpha.kubernetes.io/hostname: "{hostname}"
"#,
        hostname = hostname
    )
}

/// Replaces the first item under every `hosts:` key and every external-dns
/// hostname annotation. `hostname` is inserted literally. Blank lines
/// between `hosts:` and its first item are kept.
pub fn rewrite_hostname(content: &str, hostname: &str) -> Result<Rewrite> {
    let hosts = Regex::new(HOSTS_PATTERN)?;
    let annotation = Regex::new(DNS_ANNOTATION_PATTERN)?;
    let replaced = hosts.find_iter(content).count() + annotation.find_iter(content).count();

    let content = hosts.replace_all(content, |caps: &Captures| {
        format!("{}{}{}- {}", &caps[1], &caps[2], &caps[3], hostname)
    });
    let content = annotation.replace_all(&content, |_: &Captures| {
        format!("external-dns.alpha.kubernetes.io/hostname: \"{}\"", hostname)
    });

    Ok(Rewrite {
        content: content.into_owned(),
        replaced,
    })
}

/// Writes the template when `path` is absent, otherwise patches the
/// hostname lines in place. A file with nothing to patch is left untouched.
pub fn write_values_file(path: &Path, hostname: &str) -> Result<ValuesFileAction> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let rewrite = rewrite_hostname(&content, hostname)?;
        if rewrite.replaced == 0 {
            return Ok(ValuesFileAction::Unchanged);
        }
        fs::write(path, rewrite.content)?;
        Ok(ValuesFileAction::Updated)
    } else {
        fs::write(path, render_template(hostname))?;
        Ok(ValuesFileAction::Created)
    }
}

/// Parses `content` as YAML, returning the parser message on failure.
pub fn check_yaml(content: &str) -> std::result::Result<(), String> {
    serde_yaml::from_str::<serde_yaml::Value>(content)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
