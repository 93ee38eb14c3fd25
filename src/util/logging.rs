use std::collections::HashMap;
use std::sync::Mutex;

pub(crate) static LOGGER_CONFIG: once_cell::sync::Lazy<Mutex<LoggingConfig>> =
    once_cell::sync::Lazy::new(|| Mutex::new(LoggingConfig::default()));

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub enum LogLevel {
    INFO,
    VERBOSE,
}

#[macro_export]
macro_rules! logln {
    ($fmt:literal) => {
        if $crate::util::logging::is_enabled(Self::CC) {
            println!("[{}:{}] {}", file!(), line!(), $fmt);
        }
    };
    ($fmt:literal, $($arg:tt)*) => {
        if $crate::util::logging::is_enabled(Self::CC) {
            print!("[{}:{}] ", file!(), line!());
            println!($fmt, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! logvbln {
    ($fmt:literal) => {
        if $crate::util::logging::is_enabled(Self::CC)
            && $crate::util::logging::is_at_level(Self::CC, $crate::util::logging::LogLevel::VERBOSE)
        {
            println!("[{}:{}] {}", file!(), line!(), $fmt);
        }
    };
    ($fmt:literal, $($arg:tt)*) => {
        if $crate::util::logging::is_enabled(Self::CC)
            && $crate::util::logging::is_at_level(Self::CC, $crate::util::logging::LogLevel::VERBOSE)
        {
            print!("[{}:{}] ", file!(), line!());
            println!($fmt, $($arg)*);
        }
    }
}

pub fn is_enabled(cc: &'static str) -> bool {
    LOGGER_CONFIG.lock().unwrap().cc_enabled(cc)
}

pub fn is_at_level(cc: &'static str, level: LogLevel) -> bool {
    LOGGER_CONFIG.lock().unwrap().cc_at_level(cc, level)
}

pub fn disable_cc(cc: &'static str) {
    LOGGER_CONFIG.lock().unwrap().disable_cc(cc);
}

pub fn enable_cc(cc: &'static str, level: LogLevel) {
    LOGGER_CONFIG.lock().unwrap().enable_cc(cc, level);
}

pub fn set_global_logging(enabled: bool) {
    if enabled {
        LOGGER_CONFIG.lock().unwrap().enable_global_tracing();
    } else {
        LOGGER_CONFIG.lock().unwrap().disable_global_tracing();
    }
}

pub fn set_global_level(level: LogLevel) {
    LOGGER_CONFIG.lock().unwrap().set_global_level(level);
}

pub struct LoggingConfig {
    global_tracing_enabled: bool,
    global_level: LogLevel,
    flags: HashMap<&'static str, (bool, LogLevel)>, // <component code, (tracing enabled, trace level)>
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            global_tracing_enabled: true,
            global_level: LogLevel::INFO,
            flags: Default::default(),
        }
    }
}

impl LoggingConfig {
    pub fn cc_enabled(&self, cc: &'static str) -> bool {
        if !self.global_tracing_enabled {
            return false;
        }

        self.flags.get(cc).unwrap_or(&(true, LogLevel::INFO)).0
    }

    pub fn cc_at_level(&self, cc: &str, level: LogLevel) -> bool {
        if self.global_level >= level {
            return true;
        }

        self.flags.get(cc).unwrap_or(&(true, LogLevel::INFO)).1 == level
    }

    pub fn enable_cc(&mut self, cc: &'static str, level: LogLevel) {
        self.flags.entry(cc).or_insert((true, level));
    }

    pub fn disable_cc(&mut self, cc: &'static str) {
        self.flags.entry(cc).or_insert((false, LogLevel::INFO));
    }

    pub fn enable_global_tracing(&mut self) {
        self.global_tracing_enabled = true;
    }

    pub fn disable_global_tracing(&mut self) {
        self.global_tracing_enabled = false;
    }

    pub fn set_global_level(&mut self, level: LogLevel) {
        self.global_level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_default_to_enabled_at_info() {
        let config = LoggingConfig::default();
        assert!(config.cc_enabled("PathStore"));
        assert!(config.cc_at_level("PathStore", LogLevel::INFO));
        assert!(!config.cc_at_level("PathStore", LogLevel::VERBOSE));
    }

    #[test]
    fn disabled_component_stays_quiet() {
        let mut config = LoggingConfig::default();
        config.disable_cc("SnapshotClient");
        assert!(!config.cc_enabled("SnapshotClient"));
        assert!(config.cc_enabled("PathStore"));
    }

    #[test]
    fn global_kill_switch_overrides_component_flags() {
        let mut config = LoggingConfig::default();
        config.enable_cc("Session", LogLevel::VERBOSE);
        config.disable_global_tracing();
        assert!(!config.cc_enabled("Session"));
        config.enable_global_tracing();
        assert!(config.cc_enabled("Session"));
    }

    #[test]
    fn global_level_unlocks_verbose_everywhere() {
        let mut config = LoggingConfig::default();
        config.set_global_level(LogLevel::VERBOSE);
        assert!(config.cc_at_level("anything", LogLevel::VERBOSE));
    }
}
