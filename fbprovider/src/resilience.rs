//! Credential/model rotation retry loop and operational hook contracts.
//!
//! Each logical request tries every credential/model combination at most once.
//! Transient failures rotate to the next combination immediately; anything else
//! stops the loop.

use std::future::Future;

use crate::{FailureClass, ProviderError, ProviderId, RotationSlot, Rotator, classify_failure};

pub trait ProviderOperationHooks: Send + Sync {
    fn on_attempt_start(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _slot: &RotationSlot,
    ) {
    }

    fn on_rotation(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempt: u32,
        _slot: &RotationSlot,
        _error: &ProviderError,
    ) {
    }

    fn on_success(&self, _provider: ProviderId, _operation: &str, _attempts: u32) {}

    fn on_failure(
        &self,
        _provider: ProviderId,
        _operation: &str,
        _attempts: u32,
        _error: &ProviderError,
    ) {
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopOperationHooks;

impl ProviderOperationHooks for NoopOperationHooks {}

/// Runs `execute` once per combination until it succeeds or fails permanently.
///
/// An empty credential pool fails with a configuration error before any attempt.
/// When every attempt fails transiently, the last failure is returned.
pub async fn execute_with_rotation<T, Op, OpFuture>(
    rotator: &Rotator,
    provider: ProviderId,
    operation: &str,
    hooks: &dyn ProviderOperationHooks,
    mut execute: Op,
) -> Result<T, ProviderError>
where
    Op: FnMut(RotationSlot) -> OpFuture,
    OpFuture: Future<Output = Result<T, ProviderError>>,
{
    if rotator.credentials().is_empty() {
        let error = ProviderError::configuration("no API credentials are configured");
        hooks.on_failure(provider, operation, 0, &error);
        return Err(error);
    }

    let attempts = rotator.combinations().max(1);

    for index in 0..attempts {
        let attempt = (index + 1) as u32;
        let Some(slot) = rotator.next() else {
            break;
        };

        hooks.on_attempt_start(provider, operation, attempt, &slot);

        match execute(slot.clone()).await {
            Ok(value) => {
                hooks.on_success(provider, operation, attempt);
                return Ok(value);
            }
            Err(error) => {
                let is_last = index + 1 == attempts;
                if classify_failure(&error) == FailureClass::Transient && !is_last {
                    hooks.on_rotation(provider, operation, attempt, &slot, &error);
                    continue;
                }

                hooks.on_failure(provider, operation, attempt, &error);
                return Err(error);
            }
        }
    }

    let error = ProviderError::exhausted("all credential and model combinations are busy");
    hooks.on_failure(provider, operation, attempts as u32, &error);
    Err(error)
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{CredentialPool, ModelPool, ProviderErrorKind};

    fn rotator(keys: &str) -> Rotator {
        Rotator::new(
            CredentialPool::parse(keys),
            ModelPool::new(["flash", "pro"]).expect("model pool"),
        )
    }

    #[derive(Default)]
    struct RecordingHooks {
        events: Mutex<Vec<String>>,
    }

    impl ProviderOperationHooks for RecordingHooks {
        fn on_attempt_start(
            &self,
            provider: ProviderId,
            operation: &str,
            attempt: u32,
            slot: &RotationSlot,
        ) {
            self.events.lock().expect("events lock").push(format!(
                "start:{provider}:{operation}:{attempt}:{}:{}",
                slot.credential_index, slot.model
            ));
        }

        fn on_rotation(
            &self,
            provider: ProviderId,
            operation: &str,
            attempt: u32,
            _slot: &RotationSlot,
            _error: &ProviderError,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("rotate:{provider}:{operation}:{attempt}"));
        }

        fn on_success(&self, provider: ProviderId, operation: &str, attempts: u32) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("success:{provider}:{operation}:{attempts}"));
        }

        fn on_failure(
            &self,
            provider: ProviderId,
            operation: &str,
            attempts: u32,
            error: &ProviderError,
        ) {
            self.events
                .lock()
                .expect("events lock")
                .push(format!("failure:{provider}:{operation}:{attempts}:{:?}", error.kind));
        }
    }

    #[tokio::test]
    async fn succeeds_after_transient_failures_and_counts_calls() {
        let rotator = rotator("a,b");
        let hooks = RecordingHooks::default();
        let calls = Arc::new(Mutex::new(Vec::<String>::new()));

        let result = execute_with_rotation(
            &rotator,
            ProviderId::Gemini,
            "generate_content",
            &hooks,
            {
                let calls = Arc::clone(&calls);
                move |slot| {
                    let calls = Arc::clone(&calls);
                    async move {
                        let mut calls = calls.lock().expect("calls lock");
                        calls.push(format!("{}/{}", slot.credential.expose(), slot.model));
                        if calls.len() <= 2 {
                            Err(ProviderError::rate_limited("quota").with_status(429))
                        } else {
                            Ok("answer")
                        }
                    }
                }
            },
        )
        .await;

        assert_eq!(result.expect("third attempt should succeed"), "answer");
        assert_eq!(
            *calls.lock().expect("calls lock"),
            vec!["a/flash".to_string(), "a/pro".to_string(), "b/flash".to_string()]
        );

        let events = hooks.events.lock().expect("events lock").clone();
        assert!(events.contains(&"rotate:gemini:generate_content:1".to_string()));
        assert!(events.contains(&"rotate:gemini:generate_content:2".to_string()));
        assert!(events.contains(&"success:gemini:generate_content:3".to_string()));
    }

    #[tokio::test]
    async fn always_transient_uses_every_combination_and_surfaces_last_error() {
        let rotator = rotator("a,b,c");
        let hooks = RecordingHooks::default();
        let calls = Arc::new(Mutex::new(0_u32));

        let error = execute_with_rotation::<(), _, _>(
            &rotator,
            ProviderId::Gemini,
            "generate_content",
            &hooks,
            {
                let calls = Arc::clone(&calls);
                move |_slot| {
                    let calls = Arc::clone(&calls);
                    async move {
                        let mut calls = calls.lock().expect("calls lock");
                        *calls += 1;
                        Err(ProviderError::other(format!("rate limit hit #{}", *calls)))
                    }
                }
            },
        )
        .await
        .expect_err("every attempt fails");

        assert_eq!(*calls.lock().expect("calls lock"), 6);
        assert_eq!(error.message, "rate limit hit #6");

        let events = hooks.events.lock().expect("events lock").clone();
        assert!(events.contains(&"failure:gemini:generate_content:6:Other".to_string()));
    }

    #[tokio::test]
    async fn permanent_failure_stops_after_one_call() {
        let rotator = rotator("a,b");
        let hooks = RecordingHooks::default();
        let calls = Arc::new(Mutex::new(0_u32));

        let error = execute_with_rotation::<(), _, _>(
            &rotator,
            ProviderId::Gemini,
            "generate_content",
            &hooks,
            {
                let calls = Arc::clone(&calls);
                move |_slot| {
                    let calls = Arc::clone(&calls);
                    async move {
                        *calls.lock().expect("calls lock") += 1;
                        Err(ProviderError::authentication("key revoked").with_status(403))
                    }
                }
            },
        )
        .await
        .expect_err("auth failure is permanent");

        assert_eq!(*calls.lock().expect("calls lock"), 1);
        assert_eq!(error.kind, ProviderErrorKind::Authentication);
        let events = hooks.events.lock().expect("events lock").clone();
        assert!(events.iter().any(|event| event.starts_with("failure:gemini:generate_content:1")));
    }

    #[tokio::test]
    async fn empty_pool_fails_with_configuration_error_without_calling() {
        let rotator = rotator(" , ");
        let calls = Arc::new(Mutex::new(0_u32));

        let error = execute_with_rotation::<(), _, _>(
            &rotator,
            ProviderId::Gemini,
            "generate_content",
            &NoopOperationHooks,
            {
                let calls = Arc::clone(&calls);
                move |_slot| {
                    let calls = Arc::clone(&calls);
                    async move {
                        *calls.lock().expect("calls lock") += 1;
                        Ok(())
                    }
                }
            },
        )
        .await
        .expect_err("empty pool must fail");

        assert_eq!(error.kind, ProviderErrorKind::Configuration);
        assert_eq!(*calls.lock().expect("calls lock"), 0);
    }

    #[tokio::test]
    async fn successful_first_attempt_short_circuits() {
        let rotator = rotator("a");
        let calls = Arc::new(Mutex::new(0_u32));

        let value = execute_with_rotation(
            &rotator,
            ProviderId::Gemini,
            "generate_content",
            &NoopOperationHooks,
            {
                let calls = Arc::clone(&calls);
                move |slot| {
                    let calls = Arc::clone(&calls);
                    async move {
                        *calls.lock().expect("calls lock") += 1;
                        Ok(slot.model)
                    }
                }
            },
        )
        .await
        .expect("first attempt succeeds");

        assert_eq!(value, "flash");
        assert_eq!(*calls.lock().expect("calls lock"), 1);
    }
}
