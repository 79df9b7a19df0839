//! Process-table scanning backed by sysinfo.

use anyhow::Result;
use sysinfo::{Pid, System};

use crate::application::ports::ProcessLocator;

/// Production [`ProcessLocator`] — scans the live process table for the
/// agent's executable name.
pub struct SysinfoLocator {
    system: System,
    agent_name: String,
}

impl SysinfoLocator {
    #[must_use]
    pub fn new(agent_name: &str) -> Self {
        Self {
            system: System::new_all(),
            agent_name: agent_name.to_string(),
        }
    }
}

impl ProcessLocator for SysinfoLocator {
    fn find_agent(&mut self) -> Option<u32> {
        self.system.refresh_all();
        let own_pid = std::process::id();
        self.system
            .processes()
            .iter()
            .filter(|(pid, process)| {
                pid.as_u32() != own_pid
                    && process.name().to_string_lossy() == self.agent_name.as_str()
            })
            .map(|(pid, _)| pid.as_u32())
            .min()
    }

    fn terminate(&mut self, pid: u32) -> Result<()> {
        self.system.refresh_all();
        match self.system.process(Pid::from_u32(pid)) {
            Some(process) => {
                if process.kill() {
                    Ok(())
                } else {
                    anyhow::bail!("could not signal process {pid}")
                }
            }
            // Already exited between locate and terminate.
            None => Ok(()),
        }
    }
}
