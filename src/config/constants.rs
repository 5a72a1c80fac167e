//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default session token lifetime in seconds (1 hour)
pub const DEFAULT_JWT_TTL_SECONDS: i64 = 3600;

/// Longest accepted session token lifetime (one year)
pub const MAX_JWT_TTL_SECONDS: i64 = 365 * 24 * 3600;

/// Default bcrypt work factor
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Frontend origin allowed by CORS (Vite dev server)
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "http://localhost:5173";

// =============================================================================
// Database
// =============================================================================

/// Default connection pool size
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

/// Default time to wait for a pooled connection
pub const DEFAULT_DATABASE_ACQUIRE_TIMEOUT_SECONDS: u64 = 5;

// =============================================================================
// Client-facing messages
// =============================================================================

pub const MSG_REGISTER_OK: &str = "Usuário cadastrado com sucesso!";
pub const MSG_REGISTER_FIELDS_REQUIRED: &str = "Nome, email e senha são obrigatórios.";
pub const MSG_LOGIN_OK: &str = "Login bem-sucedido";
pub const MSG_BAD_CREDENTIALS: &str = "Email ou senha inválidos";
pub const MSG_BAD_TOKEN: &str = "Token inválido ou expirado";
pub const MSG_RSVP_OK: &str = "Confirmação de presença salva com sucesso!";
pub const MSG_GIFT_OK: &str = "Presente cadastrado com sucesso!";
pub const MSG_INTERNAL_ERROR: &str = "Erro interno do servidor";
