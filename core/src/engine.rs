//! Drives the scan: one subnet at a time, in scope file order.
//!
//! Each subnet's probe pipeline runs on its own spawned task so the caller's progress
//! display keeps animating. The task's [`JoinHandle`](tokio::task::JoinHandle) is the
//! only way its verdict comes back, and it is read once, after the task has finished.
//! The next subnet is not started before that.

use scopehunter_common::network::subnet::Subnet;
use scopehunter_common::report::Report;
use scopehunter_common::verdict::Verdict;
use tracing::error;

use crate::diagnosis;
use crate::probe::ProbeExecutor;

/// 1-based position of a subnet within the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub index: usize,
    pub total: usize,
}

/// Progress hooks, called from the coordinating task.
pub trait ScanObserver {
    fn subnet_started(&self, _position: Position, _subnet: &Subnet) {}
    fn subnet_finished(&self, _position: Position, _subnet: &Subnet, _verdict: Verdict) {}
}

/// Observer that ignores everything.
pub struct Silent;

impl ScanObserver for Silent {}

pub struct ScanEngine {
    executor: ProbeExecutor,
}

impl ScanEngine {
    pub fn new(executor: ProbeExecutor) -> Self {
        Self { executor }
    }

    pub async fn run(&self, subnets: Vec<Subnet>, observer: &dyn ScanObserver) -> Report {
        let total = subnets.len();
        let mut report = Report::with_capacity(total);

        for (idx, subnet) in subnets.into_iter().enumerate() {
            let position = Position {
                index: idx + 1,
                total,
            };
            observer.subnet_started(position, &subnet);
            let verdict = self.evaluate(&subnet).await;
            observer.subnet_finished(position, &subnet, verdict);
            report.push(subnet, verdict);
        }

        report
    }

    async fn evaluate(&self, subnet: &Subnet) -> Verdict {
        let executor = self.executor.clone();
        let target = subnet.clone();
        let worker = tokio::spawn(async move { diagnosis::diagnose(&executor, &target).await });

        match worker.await {
            Ok(verdict) => verdict,
            Err(e) => {
                error!("{subnet}: probe worker died ({e}), counting as timeout");
                Verdict::Timeout
            }
        }
    }
}
