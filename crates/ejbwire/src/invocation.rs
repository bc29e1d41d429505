//! # Invocation Descriptors
//!
//! An [`Invocation`] is one remote call's identity and intent. It is
//! immutable and always complete for its kind: [`InvocationBuilder::build`]
//! rejects field sets that do not satisfy the selected kind, and fields that
//! belong to other kinds have nowhere to live.

use remoting::ClientConfig;
use remoting::ProtocolVersion;

use crate::error::Error;
use crate::error::Result;
use crate::signature::MethodSignature;

/// What the call asks of the bean.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub enum InvocationKind {
    MethodInvocation,
    StatefulCreate,
    Cancel,
}

impl InvocationKind {
    /// The path segment naming this kind.
    pub fn tag(self) -> &'static str {
        match self {
            Self::MethodInvocation => "invoke",
            Self::StatefulCreate => "open",
            Self::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for InvocationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// Coordinates of a deployed bean.
///
/// Application, module and distinct names are optional; an empty name is
/// treated the same as an absent one.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct BeanLocator {
    app_name: Option<String>,
    module_name: Option<String>,
    distinct_name: Option<String>,
    bean_name: String,
}

impl BeanLocator {
    pub fn new(
        app_name: Option<String>,
        module_name: Option<String>,
        distinct_name: Option<String>,
        bean_name: impl Into<String>,
    ) -> Result<Self> {
        let bean_name = bean_name.into();
        if bean_name.is_empty() {
            return Err(Error::MissingField("bean name"));
        }
        check_segment("app name", app_name.as_deref())?;
        check_segment("module name", module_name.as_deref())?;
        check_segment("distinct name", distinct_name.as_deref())?;
        check_segment("bean name", Some(bean_name.as_str()))?;
        Ok(Self {
            app_name: app_name.filter(|s| !s.is_empty()),
            module_name: module_name.filter(|s| !s.is_empty()),
            distinct_name: distinct_name.filter(|s| !s.is_empty()),
            bean_name,
        })
    }

    pub fn app_name(&self) -> Option<&str> {
        self.app_name.as_deref()
    }

    pub fn module_name(&self) -> Option<&str> {
        self.module_name.as_deref()
    }

    pub fn distinct_name(&self) -> Option<&str> {
        self.distinct_name.as_deref()
    }

    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }
}

/// Each identity component occupies exactly one path segment.
fn check_segment(field: &'static str, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) if value.contains('/') => Err(Error::InvalidSegment {
            field,
            value: value.to_string(),
        }),
        _ => Ok(()),
    }
}

/// Kind-specific part of an invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Invoke `method` through `view`, on the session `session_id` if stateful.
    Invoke {
        session_id: Option<String>,
        view: String,
        method: MethodSignature,
        invocation_id: Option<u64>,
    },
    /// Open a new stateful session.
    Open,
    /// Cancel a running invocation.
    ///
    /// `cancel_if_running: None` selects the path form without the trailing
    /// flag segment. The invocation id is kept for correlation on the caller
    /// side; the cancel request itself carries no headers.
    Cancel {
        invocation_id: Option<u64>,
        cancel_if_running: Option<bool>,
    },
}

impl Operation {
    pub fn kind(&self) -> InvocationKind {
        match self {
            Self::Invoke { .. } => InvocationKind::MethodInvocation,
            Self::Open => InvocationKind::StatefulCreate,
            Self::Cancel { .. } => InvocationKind::Cancel,
        }
    }
}

/// A complete, validated remote call descriptor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    version: ProtocolVersion,
    locator: BeanLocator,
    operation: Operation,
}

impl Invocation {
    pub fn new(version: ProtocolVersion, locator: BeanLocator, operation: Operation) -> Result<Self> {
        if let Operation::Invoke {
            session_id, view, ..
        } = &operation
        {
            if view.is_empty() {
                return Err(Error::MissingField("view"));
            }
            check_segment("view", Some(view.as_str()))?;
            check_segment("session id", session_id.as_deref())?;
        }
        Ok(Self {
            version,
            locator,
            operation,
        })
    }

    pub fn builder() -> InvocationBuilder {
        InvocationBuilder::new()
    }

    pub fn version(&self) -> ProtocolVersion {
        self.version
    }

    pub fn locator(&self) -> &BeanLocator {
        &self.locator
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn kind(&self) -> InvocationKind {
        self.operation.kind()
    }

    pub fn app_name(&self) -> Option<&str> {
        self.locator.app_name()
    }

    pub fn module_name(&self) -> Option<&str> {
        self.locator.module_name()
    }

    pub fn distinct_name(&self) -> Option<&str> {
        self.locator.distinct_name()
    }

    pub fn bean_name(&self) -> &str {
        self.locator.bean_name()
    }

    pub fn session_id(&self) -> Option<&str> {
        match &self.operation {
            Operation::Invoke { session_id, .. } => session_id.as_deref(),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&str> {
        match &self.operation {
            Operation::Invoke { view, .. } => Some(view),
            _ => None,
        }
    }

    pub fn method(&self) -> Option<&MethodSignature> {
        match &self.operation {
            Operation::Invoke { method, .. } => Some(method),
            _ => None,
        }
    }

    pub fn invocation_id(&self) -> Option<u64> {
        match &self.operation {
            Operation::Invoke { invocation_id, .. } | Operation::Cancel { invocation_id, .. } => {
                *invocation_id
            }
            Operation::Open => None,
        }
    }

    pub fn cancel_if_running(&self) -> Option<bool> {
        match &self.operation {
            Operation::Cancel { cancel_if_running, .. } => *cancel_if_running,
            _ => None,
        }
    }
}

/// Fluent builder collecting invocation fields before validation.
///
/// Every setter consumes and returns the builder. [`build`](Self::build)
/// checks the fields against the selected kind and produces an immutable
/// [`Invocation`]; fields irrelevant to that kind are dropped.
#[derive(Clone, Debug, Default)]
pub struct InvocationBuilder {
    version: Option<u32>,
    kind: Option<InvocationKind>,
    app_name: Option<String>,
    module_name: Option<String>,
    distinct_name: Option<String>,
    bean_name: Option<String>,
    bean_id: Option<String>,
    view: Option<String>,
    method: Option<MethodSignature>,
    invocation_id: Option<u64>,
    cancel_if_running: Option<bool>,
}

impl InvocationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the protocol version configured for the client.
    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new().version(config.protocol_version.get())
    }

    pub fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    pub fn invocation_type(mut self, kind: InvocationKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = Some(app_name.into());
        self
    }

    pub fn module_name(mut self, module_name: impl Into<String>) -> Self {
        self.module_name = Some(module_name.into());
        self
    }

    pub fn distinct_name(mut self, distinct_name: impl Into<String>) -> Self {
        self.distinct_name = Some(distinct_name.into());
        self
    }

    pub fn bean_name(mut self, bean_name: impl Into<String>) -> Self {
        self.bean_name = Some(bean_name.into());
        self
    }

    /// Session id of an already open stateful bean.
    pub fn bean_id(mut self, bean_id: impl Into<String>) -> Self {
        self.bean_id = Some(bean_id.into());
        self
    }

    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = Some(view.into());
        self
    }

    pub fn method(mut self, method: MethodSignature) -> Self {
        self.method = Some(method);
        self
    }

    pub fn invocation_id(mut self, invocation_id: u64) -> Self {
        self.invocation_id = Some(invocation_id);
        self
    }

    pub fn cancel_if_running(mut self, cancel_if_running: bool) -> Self {
        self.cancel_if_running = Some(cancel_if_running);
        self
    }

    pub fn build(self) -> Result<Invocation> {
        let raw_version = self.version.unwrap_or(ProtocolVersion::V1.get());
        let version = ProtocolVersion::new(raw_version).ok_or(Error::InvalidVersion(raw_version))?;

        let kind = self.kind.ok_or(Error::MissingField("invocation type"))?;
        let bean_name = self.bean_name.ok_or(Error::MissingField("bean name"))?;
        let locator = BeanLocator::new(self.app_name, self.module_name, self.distinct_name, bean_name)?;

        let operation = match kind {
            InvocationKind::MethodInvocation => Operation::Invoke {
                session_id: self.bean_id.filter(|s| !s.is_empty()),
                view: self.view.ok_or(Error::MissingField("view"))?,
                method: self.method.ok_or(Error::MissingField("method"))?,
                invocation_id: self.invocation_id,
            },
            InvocationKind::StatefulCreate => Operation::Open,
            InvocationKind::Cancel => Operation::Cancel {
                invocation_id: self.invocation_id,
                cancel_if_running: self.cancel_if_running,
            },
        };

        Invocation::new(version, locator, operation)
    }

    /// Builds the descriptor and assembles its request under `mount_point`.
    pub fn create_request(self, mount_point: Option<&str>) -> Result<remoting::Request> {
        Ok(self.build()?.create_request(mount_point))
    }
}
