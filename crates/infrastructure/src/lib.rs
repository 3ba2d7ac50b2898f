//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_directory_repository;
mod postgres_audit_log_repository;
mod postgres_authorization_repository;
mod postgres_permission_repository;
mod postgres_profile_repository;
mod postgres_role_repository;
mod postgres_rows;
mod supabase_auth_provider;

pub use in_memory_directory_repository::{InMemoryDirectoryRepository, InMemoryFailure};
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_authorization_repository::PostgresAuthorizationRepository;
pub use postgres_permission_repository::PostgresPermissionRepository;
pub use postgres_profile_repository::PostgresProfileRepository;
pub use postgres_role_repository::PostgresRoleRepository;
pub use supabase_auth_provider::SupabaseAuthProvider;
