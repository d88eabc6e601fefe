use crate::shared::api_client::{post_action, CrudApi};
use crate::shared::api_utils::api_url;
use contracts::domain::a005_adicional::Adicional;
use contracts::domain::common::CatalogEntity;

pub fn api() -> CrudApi<Adicional> {
    CrudApi::new()
}

/// Move a global surcharge into the catalog; returns the updated record
pub async fn promote(id: i64) -> Result<Adicional, String> {
    let path = format!("{}/promover", CrudApi::<Adicional>::item_path(id));
    log::info!("Promoting {} {}", Adicional::element_name(), id);
    post_action(&api_url(&path)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_path() {
        assert_eq!(
            format!("{}/promover", CrudApi::<Adicional>::item_path(4)),
            "/api/adicionales/4/promover"
        );
    }
}
