use crate::error::MicroRustError;
use crate::value::Value;
use approx::relative_eq;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input at index {input_index}: analytical grad {analytical_grad} != numerical grad {numerical_grad}. Difference: {difference}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },

    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(MicroRustError),

    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(MicroRustError),

    #[error("Numerical gradient is NaN or infinite for input {input_index}. Loss+: {loss_plus}, Loss-: {loss_minus}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },

    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` builds a scalar expression out of the given leaf values and returns
/// its output node. The analytical gradients come from one `backward()` pass;
/// each numerical gradient is `(f(x + eps) - f(x - eps)) / (2 * eps)` with
/// only the one input perturbed.
///
/// Keep `func` away from non-differentiable points (the ReLU kink, pow of a
/// negative base with fractional exponent): finite differences are
/// meaningless there and the check will report a mismatch.
pub fn check_grad<F>(
    func: F,
    inputs: &[f64],
    epsilon: f64,
    tolerance: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicroRustError>,
{
    // --- Analytical pass ---
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(&leaves).map_err(GradCheckError::ForwardPassError)?;
    output
        .backward()
        .map_err(GradCheckError::BackwardPassError)?;

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical = leaf.grad();
        if !analytical.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical,
            });
        }

        // --- Numerical pass for input i ---
        let mut bumped = inputs.to_vec();
        bumped[i] = inputs[i] + epsilon;
        let loss_plus = eval(&func, &bumped)?;
        bumped[i] = inputs[i] - epsilon;
        let loss_minus = eval(&func, &bumped)?;

        let numerical = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        if !relative_eq!(
            analytical,
            numerical,
            epsilon = tolerance,
            max_relative = tolerance
        ) {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad: analytical,
                numerical_grad: numerical,
                difference: (analytical - numerical).abs(),
            });
        }
    }
    Ok(())
}

fn eval<F>(func: &F, inputs: &[f64]) -> Result<f64, GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, MicroRustError>,
{
    let leaves: Vec<Value> = inputs.iter().map(|&x| Value::new(x)).collect();
    let output = func(leaves.as_slice()).map_err(GradCheckError::ForwardPassError)?;
    Ok(output.data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_polynomial() {
        // f(x, y) = x * y + x^3
        let result = check_grad(
            |vs| {
                let cubed = vs[0].powf(3.0)?;
                Ok(&(&vs[0] * &vs[1]) + &cubed)
            },
            &[2.0, -3.0],
            1e-5,
            1e-4,
        );
        assert!(result.is_ok(), "grad check failed: {:?}", result);
    }

    #[test]
    fn test_check_grad_with_division() {
        // f(a, b) = a / b + b, away from b == 0
        let result = check_grad(
            |vs| Ok(&(&vs[0] / &vs[1]) + &vs[1]),
            &[5.0, 4.0],
            1e-5,
            1e-4,
        );
        assert!(result.is_ok(), "grad check failed: {:?}", result);
    }

    #[test]
    fn test_check_grad_with_relu() {
        // Inputs chosen well away from the ReLU kink.
        let result = check_grad(
            |vs| Ok((&vs[0] * 2.0 + 1.0).relu() + &vs[1] * &vs[1]),
            &[3.0, -2.0],
            1e-5,
            1e-4,
        );
        assert!(result.is_ok(), "grad check failed: {:?}", result);
    }

    #[test]
    fn test_check_grad_propagates_forward_error() {
        let result = check_grad(|vs| vs[0].powf(f64::NAN), &[1.0], 1e-5, 1e-4);
        assert!(matches!(
            result,
            Err(GradCheckError::ForwardPassError(
                MicroRustError::InvalidExponent { .. }
            ))
        ));
    }
}
