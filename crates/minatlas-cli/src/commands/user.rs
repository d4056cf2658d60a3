use anyhow::Result;
use minatlas_core::model::{User, UserId};
use minatlas_core::resolve::resolve_role_name;
use minatlas_core::store::{CsvStore, TableStore};
use minatlas_core::users::{delete_user, ensure_admin, register_user, Sha256Hasher};

#[derive(Debug, clap::Subcommand)]
pub enum UserCommand {
    /// Register a researcher account
    Register {
        username: String,
        password: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// Ensure the administrator account exists, creating it on first use
    Admin {
        username: String,
        password: String,
        #[arg(long, default_value = "")]
        email: String,
    },
    /// List accounts
    List,
    /// Delete an account (self-deletion is refused)
    Rm {
        /// Id of the account to delete
        user_id: u32,
        /// Id of the acting account
        #[arg(long)]
        acting: u32,
    },
}

pub fn run_user(store: &CsvStore, command: UserCommand) -> Result<()> {
    let hasher = Sha256Hasher;

    match command {
        UserCommand::Register {
            username,
            password,
            email,
        } => {
            let user = register_user(store, &hasher, &username, &password, &email)?;
            println!("✓ Registered {} (id {})", user.username, user.id);
        }
        UserCommand::Admin {
            username,
            password,
            email,
        } => {
            let user = ensure_admin(store, &hasher, &username, &password, &email)?;
            println!("✓ Admin account {} (id {})", user.username, user.id);
        }
        UserCommand::List => {
            let users = store.load::<User>();
            if users.is_empty() {
                println!("No accounts registered.");
                return Ok(());
            }
            println!("\nAccounts\n");
            for user in users {
                println!(
                    "  {:>2}  {:<16} {:<12} {}",
                    user.id,
                    user.username,
                    resolve_role_name(store, user.role_id),
                    user.email,
                );
            }
        }
        UserCommand::Rm { user_id, acting } => {
            let removed = delete_user(store, UserId::new(acting), UserId::new(user_id))?;
            if removed {
                println!("✓ Deleted user {user_id}");
            } else {
                println!("No user with id {user_id}; table unchanged.");
            }
        }
    }

    Ok(())
}
