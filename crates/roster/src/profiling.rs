use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fastrace::collector::{Reporter, SpanRecord};
use roster_types::FunctionStats;

pub struct CollectingReporter {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl CollectingReporter {
    pub fn new() -> (Self, SpanCollector) {
        let spans = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                spans: spans.clone(),
            },
            SpanCollector { spans },
        )
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, spans: Vec<SpanRecord>) {
        if let Ok(mut collected) = self.spans.lock() {
            collected.extend(spans);
        }
    }
}

pub struct SpanCollector {
    spans: Arc<Mutex<Vec<SpanRecord>>>,
}

impl SpanCollector {
    pub fn collect_and_aggregate(&self) -> Vec<FunctionStats> {
        let spans = match self.spans.lock() {
            Ok(mut spans) => std::mem::take(&mut *spans),
            Err(_) => return Vec::new(),
        };
        let timings: Vec<(String, u64)> = spans
            .into_iter()
            .map(|s| (simplify_name(&s.name), s.duration_ns))
            .collect();
        compute_function_stats(&timings)
    }
}

fn simplify_name(name: &str) -> String {
    let name = name.replace("::{{closure}}", "");
    match name.rfind("::") {
        Some(pos) => name[pos + 2..].to_string(),
        None => name,
    }
}

fn compute_function_stats(timings: &[(String, u64)]) -> Vec<FunctionStats> {
    let mut by_name: HashMap<&str, Vec<u64>> = HashMap::new();

    for (name, duration_ns) in timings {
        by_name.entry(name.as_str()).or_default().push(duration_ns / 1000);
    }

    let mut stats: Vec<FunctionStats> = by_name
        .into_iter()
        .map(|(name, mut durations)| {
            durations.sort_unstable();
            let calls = durations.len() as u32;
            let total_us: u64 = durations.iter().sum();
            let avg_us = if calls > 0 { total_us / calls as u64 } else { 0 };
            let p90_idx = ((durations.len() as f64 * 0.9).ceil() as usize).saturating_sub(1);
            let p90_us = durations.get(p90_idx).copied().unwrap_or(0);
            let max_us = durations.last().copied().unwrap_or(0);

            FunctionStats {
                name: name.to_string(),
                calls,
                total_us,
                avg_us,
                p90_us,
                max_us,
            }
        })
        .collect();

    stats.sort_by(|a, b| b.total_us.cmp(&a.total_us).then_with(|| a.name.cmp(&b.name)));
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplify_name() {
        assert_eq!(
            simplify_name("roster_directory::directory::Directory::add_user"),
            "add_user"
        );
        assert_eq!(simplify_name("validate_email::{{closure}}"), "validate_email");
        assert_eq!(simplify_name("root"), "root");
    }

    #[test]
    fn test_compute_function_stats() {
        let timings: Vec<(String, u64)> = vec![
            ("validate_email".to_string(), 2_000),
            ("validate_email".to_string(), 4_000),
            ("add_user".to_string(), 10_000),
        ];
        let stats = compute_function_stats(&timings);

        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].name, "add_user");
        assert_eq!(stats[0].calls, 1);
        assert_eq!(stats[0].total_us, 10);

        let email = &stats[1];
        assert_eq!(email.calls, 2);
        assert_eq!(email.total_us, 6);
        assert_eq!(email.avg_us, 3);
        assert_eq!(email.p90_us, 4);
        assert_eq!(email.max_us, 4);
    }
}
