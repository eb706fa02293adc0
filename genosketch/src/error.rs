// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Error types for sketch operations.

use std::fmt;

/// Error returned by fallible sketch operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Two sketches cannot be combined because their configurations differ.
    IncompatibleSketches,
}

impl Error {
    pub(crate) fn incompatible_sketches(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::IncompatibleSketches,
            message: message.into(),
        }
    }

    /// Return the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Return the human-readable description of this error.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::IncompatibleSketches => {
                write!(f, "incompatible sketches: {}", self.message)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_message() {
        let err = Error::incompatible_sketches("precision mismatch: 12 vs 14");
        assert_eq!(err.kind(), ErrorKind::IncompatibleSketches);
        assert_eq!(
            err.to_string(),
            "incompatible sketches: precision mismatch: 12 vs 14"
        );
    }
}
