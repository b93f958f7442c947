//! Registrar configuration
//!
//! Handler options are resolved by overlaying a caller-supplied partial
//! [`StreamHandlerOptionsInit`] on the registrar's defaults. Only fields the
//! caller actually set override a default.

/// Default limit on concurrent inbound streams per handler
pub const DEFAULT_MAX_INBOUND_STREAMS: usize = 1;

/// Default limit on concurrent outbound streams per handler
pub const DEFAULT_MAX_OUTBOUND_STREAMS: usize = 1;

/// Resolved options stored alongside a stream handler
///
/// The mock registrar records these but never enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamHandlerOptions {
    /// Maximum inbound streams open at once for the protocol
    pub max_inbound_streams: usize,

    /// Maximum outbound streams open at once for the protocol
    pub max_outbound_streams: usize,
}

impl Default for StreamHandlerOptions {
    fn default() -> Self {
        Self {
            max_inbound_streams: DEFAULT_MAX_INBOUND_STREAMS,
            max_outbound_streams: DEFAULT_MAX_OUTBOUND_STREAMS,
        }
    }
}

impl StreamHandlerOptions {
    /// Set the inbound stream limit
    pub fn max_inbound_streams(mut self, max: usize) -> Self {
        self.max_inbound_streams = max;
        self
    }

    /// Set the outbound stream limit
    pub fn max_outbound_streams(mut self, max: usize) -> Self {
        self.max_outbound_streams = max;
        self
    }

    /// Overlay the fields present in `init`, keeping the rest
    pub fn merge(self, init: &StreamHandlerOptionsInit) -> Self {
        Self {
            max_inbound_streams: init.max_inbound_streams.unwrap_or(self.max_inbound_streams),
            max_outbound_streams: init
                .max_outbound_streams
                .unwrap_or(self.max_outbound_streams),
        }
    }
}

/// Partial handler options supplied at registration time
///
/// `None` means "use the default".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamHandlerOptionsInit {
    /// Inbound stream limit override
    pub max_inbound_streams: Option<usize>,

    /// Outbound stream limit override
    pub max_outbound_streams: Option<usize>,
}

impl StreamHandlerOptionsInit {
    /// Create an empty set of overrides
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the inbound stream limit
    pub fn max_inbound_streams(mut self, max: usize) -> Self {
        self.max_inbound_streams = Some(max);
        self
    }

    /// Override the outbound stream limit
    pub fn max_outbound_streams(mut self, max: usize) -> Self {
        self.max_outbound_streams = Some(max);
        self
    }
}

impl From<StreamHandlerOptions> for StreamHandlerOptionsInit {
    fn from(options: StreamHandlerOptions) -> Self {
        Self {
            max_inbound_streams: Some(options.max_inbound_streams),
            max_outbound_streams: Some(options.max_outbound_streams),
        }
    }
}

/// Mock registrar configuration
#[derive(Debug, Clone, Default)]
pub struct RegistrarConfig {
    /// Options applied to handlers before caller overrides
    pub default_handler_options: StreamHandlerOptions,
}

impl RegistrarConfig {
    /// Set the default handler options
    pub fn default_handler_options(mut self, options: StreamHandlerOptions) -> Self {
        self.default_handler_options = options;
        self
    }
}
