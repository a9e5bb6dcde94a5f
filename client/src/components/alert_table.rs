//! Static table of mock alerts shown on the home page.

#[cfg(test)]
#[path = "alert_table_test.rs"]
mod alert_table_test;

use leptos::prelude::*;

use crate::util::theme::FIRING_COLOR;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alert {
    pub name: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub firing: bool,
}

pub const ALERTS: [Alert; 5] = [
    Alert {
        name: "CPU usage high",
        severity: Severity::Critical,
        description: "CPU usage is above 90%",
        firing: true,
    },
    Alert {
        name: "Memory usage high",
        severity: Severity::Warning,
        description: "Memory usage is above 80%",
        firing: true,
    },
    Alert {
        name: "Disk space low",
        severity: Severity::Warning,
        description: "Free disk space is below 10%",
        firing: true,
    },
    Alert {
        name: "HTTP error rate",
        severity: Severity::Warning,
        description: "HTTP error rate is above 5%",
        firing: true,
    },
    Alert {
        name: "Number of requests",
        severity: Severity::Info,
        description: "Number of requests is above 1000 per minute",
        firing: true,
    },
];

/// Inline text color for a row, if any.
pub fn row_color(alert: &Alert) -> Option<&'static str> {
    alert.firing.then_some(FIRING_COLOR)
}

#[component]
pub fn AlertTable() -> impl IntoView {
    view! {
        <div class="card alert-table">
            <table class="alert-table__table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Severity"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    {ALERTS
                        .into_iter()
                        .map(|alert| {
                            let color = row_color(&alert).unwrap_or("inherit");
                            view! {
                                <tr class="alert-table__row" class:alert-table__row--firing=alert.firing>
                                    <th scope="row" style:color=color>{alert.name}</th>
                                    <td style:color=color>{alert.severity.as_str()}</td>
                                    <td style:color=color>{alert.description}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}
