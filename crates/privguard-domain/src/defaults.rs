//! Table-driven default substitution.
//!
//! Every value a check reads has a documented platform default that applies
//! when the value is absent. Substitution happens exactly once, immediately
//! after the read and before any comparison or description lookup. Getting a
//! default wrong silently flips verdicts, so the defaults live in one table
//! and are tested independently of the decision logic.

use privguard_host::{Host, HostError, RegValue};
use privguard_types::{ids, FactId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DefaultValue {
    Dword(u32),
    Sz(&'static str),
}

impl DefaultValue {
    fn materialize(self) -> RegValue {
        match self {
            DefaultValue::Dword(v) => RegValue::Dword(v),
            DefaultValue::Sz(s) => RegValue::Sz(s.to_string()),
        }
    }
}

/// One entry of a check's read table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValueSpec {
    pub key: &'static str,
    pub name: &'static str,
    pub default: DefaultValue,
}

impl ValueSpec {
    pub fn identity(&self) -> FactId {
        FactId::registry(self.key, self.name)
    }
}

/// One configuration read after default substitution.
#[derive(Clone, Debug)]
pub struct Resolved {
    pub identity: FactId,
    pub value: RegValue,
    /// True when the read came back absent and the default was substituted.
    pub defaulted: bool,
}

impl Resolved {
    /// Numeric view; non-dword values count as 0.
    pub fn dword(&self) -> u32 {
        self.value.as_dword().unwrap_or(0)
    }

    /// String view; non-string values count as empty.
    pub fn text(&self) -> &str {
        self.value.as_str().unwrap_or("")
    }

    pub fn render(&self) -> String {
        self.value.render()
    }
}

/// The single substitution helper every check reads through.
pub fn read_with_default(host: &dyn Host, spec: &ValueSpec) -> Result<Resolved, HostError> {
    let raw = host.read_value(spec.key, spec.name)?;
    Ok(match raw {
        Some(value) => Resolved {
            identity: spec.identity(),
            value,
            defaulted: false,
        },
        None => Resolved {
            identity: spec.identity(),
            value: spec.default.materialize(),
            defaulted: true,
        },
    })
}

// installer.always_install_elevated
pub const AIE_MACHINE: ValueSpec = ValueSpec {
    key: ids::KEY_INSTALLER_MACHINE,
    name: ids::VAL_ALWAYS_INSTALL_ELEVATED,
    default: DefaultValue::Dword(0),
};
pub const AIE_USER: ValueSpec = ValueSpec {
    key: ids::KEY_INSTALLER_USER,
    name: ids::VAL_ALWAYS_INSTALL_ELEVATED,
    default: DefaultValue::Dword(0),
};

// updates.wsus_over_http
pub const WSUS_SERVER: ValueSpec = ValueSpec {
    key: ids::KEY_WINDOWS_UPDATE,
    name: ids::VAL_WU_SERVER,
    default: DefaultValue::Sz(""),
};
pub const WSUS_USE_SERVER: ValueSpec = ValueSpec {
    key: ids::KEY_WINDOWS_UPDATE_AU,
    name: ids::VAL_USE_WU_SERVER,
    default: DefaultValue::Dword(0),
};
pub const WSUS_PROXY_BEHAVIOR: ValueSpec = ValueSpec {
    key: ids::KEY_WINDOWS_UPDATE,
    name: ids::VAL_SET_PROXY_BEHAVIOR,
    default: DefaultValue::Dword(0),
};
pub const WSUS_DISABLE_ACCESS: ValueSpec = ValueSpec {
    key: ids::KEY_WINDOWS_UPDATE,
    name: ids::VAL_DISABLE_WU_ACCESS,
    default: DefaultValue::Dword(0),
};

// environment.writable_path_dirs
pub const SYSTEM_PATH: ValueSpec = ValueSpec {
    key: ids::KEY_SESSION_ENVIRONMENT,
    name: ids::VAL_PATH,
    default: DefaultValue::Sz(""),
};

// printers.point_and_print — restrictive default for the admin gate, the
// permissive platform default everywhere else.
pub const PNP_RESTRICT_DRIVER_INSTALL: ValueSpec = ValueSpec {
    key: ids::KEY_POINT_AND_PRINT,
    name: ids::VAL_RESTRICT_DRIVER_INSTALL,
    default: DefaultValue::Dword(1),
};
pub const PNP_NO_WARNING_NO_ELEVATION: ValueSpec = ValueSpec {
    key: ids::KEY_POINT_AND_PRINT,
    name: ids::VAL_NO_WARNING_NO_ELEVATION,
    default: DefaultValue::Dword(0),
};
pub const PNP_UPDATE_PROMPT_SETTINGS: ValueSpec = ValueSpec {
    key: ids::KEY_POINT_AND_PRINT,
    name: ids::VAL_UPDATE_PROMPT_SETTINGS,
    default: DefaultValue::Dword(0),
};
pub const PNP_TRUSTED_SERVERS: ValueSpec = ValueSpec {
    key: ids::KEY_POINT_AND_PRINT,
    name: ids::VAL_TRUSTED_SERVERS,
    default: DefaultValue::Dword(0),
};
pub const PNP_SERVER_LIST: ValueSpec = ValueSpec {
    key: ids::KEY_POINT_AND_PRINT,
    name: ids::VAL_SERVER_LIST,
    default: DefaultValue::Sz(""),
};
pub const PNP_PACKAGE_SERVER_LIST: ValueSpec = ValueSpec {
    key: ids::KEY_PACKAGE_POINT_AND_PRINT,
    name: ids::VAL_PACKAGE_SERVER_LIST,
    default: DefaultValue::Dword(0),
};

// devices.driver_coinstallers
pub const DISABLE_COINSTALLERS: ValueSpec = ValueSpec {
    key: ids::KEY_DEVICE_INSTALLER,
    name: ids::VAL_DISABLE_COINSTALLERS,
    default: DefaultValue::Dword(0),
};

/// Every table entry, for exhaustive default tests.
pub const ALL: &[ValueSpec] = &[
    AIE_MACHINE,
    AIE_USER,
    WSUS_SERVER,
    WSUS_USE_SERVER,
    WSUS_PROXY_BEHAVIOR,
    WSUS_DISABLE_ACCESS,
    SYSTEM_PATH,
    PNP_RESTRICT_DRIVER_INSTALL,
    PNP_NO_WARNING_NO_ELEVATION,
    PNP_UPDATE_PROMPT_SETTINGS,
    PNP_TRUSTED_SERVERS,
    PNP_SERVER_LIST,
    PNP_PACKAGE_SERVER_LIST,
    DISABLE_COINSTALLERS,
];
