use super::ProcessRecord;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Asc,
    Desc,
}

impl SortDir {
    pub fn toggle(self) -> Self {
        match self {
            SortDir::Asc => SortDir::Desc,
            SortDir::Desc => SortDir::Asc,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortDir::Asc => "asc",
            SortDir::Desc => "desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "asc" => Some(SortDir::Asc),
            "desc" => Some(SortDir::Desc),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortKey {
    Pid,
    State,
    Name,
    Command,
    Env,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Pid => "pid",
            SortKey::State => "state",
            SortKey::Name => "name",
            SortKey::Command => "command",
            SortKey::Env => "env",
        }
    }

    pub fn default_dir(self) -> SortDir {
        match self {
            SortKey::Env => SortDir::Desc,
            SortKey::Pid | SortKey::State | SortKey::Name | SortKey::Command => SortDir::Asc,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "pid" => Some(SortKey::Pid),
            "stat" | "state" | "status" => Some(SortKey::State),
            "name" => Some(SortKey::Name),
            "cmd" | "command" => Some(SortKey::Command),
            "env" | "environment" => Some(SortKey::Env),
            _ => None,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SortKey::Pid => SortKey::State,
            SortKey::State => SortKey::Name,
            SortKey::Name => SortKey::Command,
            SortKey::Command => SortKey::Env,
            SortKey::Env => SortKey::Pid,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SortKey::Pid => SortKey::Env,
            SortKey::State => SortKey::Pid,
            SortKey::Name => SortKey::State,
            SortKey::Command => SortKey::Name,
            SortKey::Env => SortKey::Command,
        }
    }
}

pub fn sort_records(records: &mut [ProcessRecord], sort_key: SortKey, sort_dir: SortDir) {
    records.sort_by(|a, b| {
        let ordering = match sort_key {
            SortKey::Pid => a.pid.cmp(&b.pid),
            SortKey::State => a.status_code.cmp(&b.status_code),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Command => a.argv.cmp(&b.argv),
            SortKey::Env => a.environment.len().cmp(&b.environment.len()),
        };

        let ordering = match sort_dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        };

        ordering.then_with(|| a.pid.cmp(&b.pid))
    });
}
