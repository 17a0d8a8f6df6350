use anyhow::anyhow;
use wellness_core::EngineError;

/// Prefix an engine failure with what was being attempted. Transient failures
/// say so, since re-running the command may succeed.
pub fn engine_failure(action: &str, err: EngineError) -> anyhow::Error {
    if err.is_transient() {
        anyhow!("{action}: {err} (retrying may help)")
    } else {
        anyhow!("{action}: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_failures_suggest_retry() {
        let err = engine_failure("cannot score check-in", EngineError::storage("disk full"));
        assert_eq!(
            err.to_string(),
            "cannot score check-in: storage error: disk full (retrying may help)"
        );
    }

    #[test]
    fn configuration_failures_do_not() {
        let err = engine_failure("cannot generate plan", EngineError::configuration("days=7"));
        assert_eq!(err.to_string(), "cannot generate plan: configuration error: days=7");
    }
}
