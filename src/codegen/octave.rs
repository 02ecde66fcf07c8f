use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::RawParams;

pub const DEFAULT_FILE_NAME: &str = "lms_ar.m";

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("no code to write, generate code first")]
    Empty,

    #[error("writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

const FUNCTION_TEMPLATE: &str = r"
function lms_ar(N, u_init, mu)
% N: Number of samples
% u_init: Initial values of u [u(1), u(2)]
% mu: Step size for LMS algorithm

% Initialize random noise
v = rand(N, 1);

% Initialize u with given initial values
u = zeros(N, 1);
u(1) = u_init(1);
u(2) = u_init(2);
% Generate autoregressive process
for i = 3:N
u(i) = 0.75 * u(i-1) - 0.5 * u(i-2) + v(i);
endfor

% Calculate autocorrelation matrix R and cross-correlation vector p
R = zeros(2, 2);
p = zeros(2, 1);

for i = 2:N
x = [v(i); v(i-1)];
R = R + x * x';
p = p + x * u(i);
endfor

R = R / (N-1);
p = p / (N-1);
w_opt = R \ p;

% Initialize LMS weights and error
w_lms = zeros(2, N);
e = zeros(N, 1);

% LMS algorithm
for i = 2:N
e(i) = u(i) - w_lms(:, i-1)' * [v(i); v(i-1)];
w_lms(:, i) = w_lms(:, i-1) + mu * [v(i); v(i-1)] * e(i);
endfor

% Plot mean square error
figure(1)
plot(e.^2);
title('Mean Square Error vs Number of Iterations')
xlabel('Number of Iterations')
ylabel('Mean Square Error')

% Plot random walk of w1
figure(2)
plot(1:N, w_lms(1, :));
hold on
plot(1:N, ones(1, N) * w_opt(1))
title('Random Walk of w1')
xlabel('Number of Iterations')
ylabel('w1')
legend('Estimated w1', 'Optimal w1')
hold off

% Plot random walk of w2
figure(3)
plot(1:N, w_lms(2, :));
hold on
plot(1:N, ones(1, N) * w_opt(2))
title('Random Walk of w2')
xlabel('Number of Iterations')
ylabel('w2')
legend('Estimated w2', 'Optimal w2')
hold off
endfunction
";

/// Returns Octave source code defining `lms_ar(N, u_init, mu)` followed by
/// a call using the given parameters, inserted verbatim.
pub fn octave_source(params: &RawParams) -> String {
    let call = format!(
        "N = {};\nu_init = [{}, {}];\nmu = {};\nlms_ar(N, u_init, mu);",
        params.n, params.u1, params.u2, params.mu
    );
    let source = format!("{}\n{}\n", FUNCTION_TEMPLATE, call);
    source.trim().to_string()
}

/// Writes generated source code to `path`. Refuses to write blank code.
pub fn write_source(source: &str, path: &Path) -> Result<(), CodegenError> {
    if source.trim().is_empty() {
        return Err(CodegenError::Empty);
    }
    fs::write(path, source).map_err(|source| CodegenError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "wrote octave source");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameters_are_inserted_verbatim() {
        let source = octave_source(&RawParams::new("0050", "1e-1", " -2", "0.10"));
        assert!(source.ends_with("N = 0050;\nu_init = [1e-1,  -2];\nmu = 0.10;\nlms_ar(N, u_init, mu);"));
    }

    #[test]
    fn test_template_matches_simulation() {
        let source = octave_source(&RawParams::default());
        assert!(source.contains("u(i) = 0.75 * u(i-1) - 0.5 * u(i-2) + v(i);"));
        assert!(source.contains("for i = 3:N"));
        assert!(source.contains("w_opt = R \\ p;"));
        assert!(source.contains("R = R / (N-1);"));
        assert_eq!(source.matches("for i = 2:N").count(), 2);
        assert_eq!(source, source.trim());
    }

    #[test]
    fn test_empty_parameters_are_interpolated() {
        let source = octave_source(&RawParams::new("", "", "", ""));
        assert!(source.contains("N = ;"));
    }

    #[test]
    fn test_write_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        let source = octave_source(&RawParams::default());
        write_source(&source, &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), source);

        assert!(matches!(write_source("  \n", &path), Err(CodegenError::Empty)));
        // The rejected write leaves the previous file alone
        assert_eq!(fs::read_to_string(&path).unwrap(), source);

        let missing_dir = dir.path().join("missing").join(DEFAULT_FILE_NAME);
        assert!(matches!(
            write_source(&source, &missing_dir),
            Err(CodegenError::Io { .. })
        ));
    }
}
