// Serviços do job de sincronização de anotações
pub mod annotations;
pub mod sheet_header;
pub mod sync_job;
pub mod update_planner;

pub use annotations::{reduce_latest, AnnotationMap, LatestAnnotation};
pub use sheet_header::{resolve_columns, RequiredColumns, SheetColumns};
pub use sync_job::SyncJob;
pub use update_planner::{plan_updates, CellUpdate, UpdatePlan};
