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

//! Console rendering of comparison results.

use genosketch::compare::ErrorSummary;
use genosketch::compare::PairReport;

fn pair_line(report: &PairReport) -> String {
    match (report.exact(), report.relative_error()) {
        (Some(exact), Some(error)) => format!(
            "{} vs {}: jaccard = {:.4} (exact {:.4}, rel err {:.2}%)",
            report.label_a(),
            report.label_b(),
            report.estimated(),
            exact,
            error * 100.0
        ),
        (Some(exact), None) => format!(
            "{} vs {}: jaccard = {:.4} (exact {:.4})",
            report.label_a(),
            report.label_b(),
            report.estimated(),
            exact
        ),
        (None, _) => format!(
            "{} vs {}: jaccard = {:.4}",
            report.label_a(),
            report.label_b(),
            report.estimated()
        ),
    }
}

fn summary_line(summary: &ErrorSummary) -> String {
    format!(
        "{} pairs: mean rel err {:.2}%, max rel err {:.2}%",
        summary.pairs(),
        summary.mean_relative_error() * 100.0,
        summary.max_relative_error() * 100.0
    )
}

pub(crate) fn print_pairs(reports: &[PairReport]) {
    for report in reports {
        println!("{}", pair_line(report));
    }
}

pub(crate) fn print_summary(summary: &ErrorSummary) {
    println!("{}", summary_line(summary));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_line_without_exact() {
        let row = PairReport::new("ecoli_k12", "styphimurium", 0.3137);
        insta::assert_snapshot!(pair_line(&row), @"ecoli_k12 vs styphimurium: jaccard = 0.3137");
    }

    #[test]
    fn pair_line_with_exact() {
        let row = PairReport::new("ecoli_k12", "styphimurium", 0.3137).with_exact(0.3208);
        insta::assert_snapshot!(
            pair_line(&row),
            @"ecoli_k12 vs styphimurium: jaccard = 0.3137 (exact 0.3208, rel err 2.21%)"
        );
    }

    #[test]
    fn pair_line_with_zero_exact() {
        let row = PairReport::new("a", "b", 0.0).with_exact(0.0);
        insta::assert_snapshot!(pair_line(&row), @"a vs b: jaccard = 0.0000 (exact 0.0000)");
    }

    #[test]
    fn summary_line_formats_percentages() {
        let reports = [
            PairReport::new("a", "b", 0.5).with_exact(0.5),
            PairReport::new("a", "c", 0.22).with_exact(0.2),
        ];
        let summary = ErrorSummary::from_reports(&reports).unwrap();
        insta::assert_snapshot!(
            summary_line(&summary),
            @"2 pairs: mean rel err 5.00%, max rel err 10.00%"
        );
    }
}
