//! Input validation for simulation requests.
//!
//! Checks the process set and parameters before any timeline is produced.
//! Detects:
//! - Empty process sets
//! - Negative arrival times
//! - Non-positive burst times
//! - Out-of-range scheduling parameters (overhead, time quantum)

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::models::ProcessInput;

/// Validation result carrying every detected issue.
pub type ValidationResult = Result<(), Vec<SimError>>;

/// Validates a process set.
///
/// Processes are referred to by the id they will receive (`P1` for the
/// first input). An empty set yields only [`SimError::EmptyInput`].
pub fn validate_processes(inputs: &[ProcessInput]) -> ValidationResult {
    if inputs.is_empty() {
        return Err(vec![SimError::EmptyInput]);
    }
    if u32::try_from(inputs.len()).is_err() {
        return Err(vec![SimError::invalid(format!(
            "too many processes: {}",
            inputs.len()
        ))]);
    }

    let mut errors = Vec::new();
    for (pos, input) in inputs.iter().enumerate() {
        let id = pos + 1;
        if input.arrival_time < 0 {
            errors.push(SimError::invalid(format!(
                "P{id}: arrival time must be >= 0, got {}",
                input.arrival_time
            )));
        }
        if input.burst_time <= 0 {
            errors.push(SimError::invalid(format!(
                "P{id}: burst time must be > 0, got {}",
                input.burst_time
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a full request: parameters first, then processes.
pub fn validate_input(inputs: &[ProcessInput], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();
    if let Err(e) = config.validate() {
        errors.push(e);
    }
    if let Err(mut process_errors) = validate_processes(inputs) {
        errors.append(&mut process_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::Algorithm;

    fn sample_inputs() -> Vec<ProcessInput> {
        vec![ProcessInput::new(0, 5), ProcessInput::new(1, 3)]
    }

    #[test]
    fn test_valid_input() {
        let config = SimulationConfig::default();
        assert!(validate_input(&sample_inputs(), &config).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors, vec![SimError::EmptyInput]);
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[ProcessInput::new(-1, 2)]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("P1"));
    }

    #[test]
    fn test_non_positive_burst() {
        let inputs = vec![ProcessInput::new(0, 1), ProcessInput::new(0, 0)];
        let errors = validate_processes(&inputs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("P2"));
    }

    #[test]
    fn test_multiple_errors() {
        let config = SimulationConfig::new(Algorithm::RoundRobin)
            .with_overhead(-2)
            .with_time_quantum(2);
        let inputs = vec![ProcessInput::new(-1, 0)];
        let errors = validate_input(&inputs, &config).unwrap_err();
        // overhead + arrival + burst
        assert_eq!(errors.len(), 3);
        assert!(errors
            .iter()
            .all(|e| matches!(e, SimError::InvalidParameter(_))));
    }
}
