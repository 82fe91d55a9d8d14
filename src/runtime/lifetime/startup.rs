use crate::errors::Result;
use crate::services::Services;
use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub services: Services,
}

/// 打印当前记录数量，便于确认连接的是哪个数据库
async fn log_record_counts(storage: &Arc<dyn Storage>) {
    match (
        storage.count_teachers().await,
        storage.count_courses().await,
        storage.count_students().await,
    ) {
        (Ok(teachers), Ok(courses), Ok(students)) => {
            debug!(
                "Database has {} teacher(s), {} course(s), {} student(s)",
                teachers, courses, students
            );
        }
        _ => {
            warn!("Failed to count records, continuing");
        }
    }
}

/// 准备启动上下文
/// 包括存储（含迁移）与服务
pub async fn prepare_startup() -> Result<StartupContext> {
    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    log_record_counts(&storage).await;

    let services = Services::new(storage.clone());

    Ok(StartupContext { storage, services })
}
