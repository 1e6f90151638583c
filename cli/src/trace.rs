use std::fs;
use std::path::Path;

use cachew_sim::Request;

use crate::error::HarnessError;

/// Loads a trace file: whitespace-separated unsigned page ids, any number
/// per line. Blank lines are skipped and `#` starts a comment that runs to
/// the end of the line.
pub fn load_trace(path: &Path) -> Result<Vec<Request>, HarnessError> {
  let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
    path: path.to_path_buf(),
    source,
  })?;
  let mut requests = Vec::new();
  for (index, line) in text.lines().enumerate() {
    let data = match line.find('#') {
      Some(comment) => &line[..comment],
      None => line,
    };
    for token in data.split_whitespace() {
      let page: u64 = token.parse().map_err(|_| HarnessError::Trace {
        path: path.to_path_buf(),
        line: index + 1,
        token: token.to_string(),
      })?;
      requests.push(Request::new(page));
    }
  }
  Ok(requests)
}
