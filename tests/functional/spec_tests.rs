//! Spec checks shared by create and update.

use ssp_operator::SspValidator;
use ssp_operator::crd::{GOLDEN_IMAGES_NAMESPACE, Ssp};

use crate::{SspBuilder, cluster};

fn ssp_with_unnamed_template() -> Ssp {
    SspBuilder::new("test-ssp")
        .namespace("test-ns")
        .data_import_cron(None, Some(GOLDEN_IMAGES_NAMESPACE))
        .build()
}

fn name_first_template(ssp: &mut Ssp) {
    ssp.spec.common_templates.data_import_cron_templates[0]
        .metadata
        .name = Some("test-name".to_string());
}

#[tokio::test]
async fn test_data_import_cron_templates_validated_on_create() {
    let validator = SspValidator::new(cluster());
    let mut new_ssp = ssp_with_unnamed_template();

    assert!(validator.validate_create(&new_ssp).await.is_err());
    name_first_template(&mut new_ssp);
    assert!(validator.validate_create(&new_ssp).await.is_ok());
}

#[tokio::test]
async fn test_data_import_cron_templates_validated_on_update() {
    let validator = SspValidator::new(cluster());
    let old_ssp = ssp_with_unnamed_template();
    let mut new_ssp = old_ssp.clone();

    assert!(validator.validate_update(&old_ssp, &new_ssp).await.is_err());
    name_first_template(&mut new_ssp);
    assert!(validator.validate_update(&old_ssp, &new_ssp).await.is_ok());
}

fn instancetypes_ssp(url: &str) -> Ssp {
    SspBuilder::new("ssp").instancetypes_url(url).build()
}

#[tokio::test]
async fn test_rejects_url_without_https_or_ssh() {
    let validator = SspValidator::new(cluster());
    assert!(
        validator
            .validate_create(&instancetypes_ssp("file://foo/bar"))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_rejects_url_without_ref_or_version() {
    let validator = SspValidator::new(cluster());
    assert!(
        validator
            .validate_create(&instancetypes_ssp("https://foo.com/bar"))
            .await
            .is_err()
    );
}

#[tokio::test]
async fn test_accepts_valid_remote_kustomize_target_urls() {
    let validator = SspValidator::new(cluster());

    for url in [
        "https://foo.com/bar?ref=1234",
        "https://foo.com/bar?version=1234",
        "ssh://foo.com/bar?ref=1234",
        "ssh://foo.com/bar?version=1234",
    ] {
        let result = validator.validate_create(&instancetypes_ssp(url)).await;
        assert!(result.is_ok(), "{} should be accepted: {:?}", url, result);
    }
}

#[tokio::test]
async fn test_accepts_when_no_url_is_provided() {
    let validator = SspValidator::new(cluster());

    let ssp = SspBuilder::new("ssp").instancetypes().build();
    validator.validate_create(&ssp).await.unwrap();

    let ssp = SspBuilder::new("ssp").build();
    validator.validate_create(&ssp).await.unwrap();
}

#[tokio::test]
async fn test_url_checked_on_update() {
    let validator = SspValidator::new(cluster());
    let old = instancetypes_ssp("https://foo.com/bar?ref=1234");
    let new = instancetypes_ssp("file://foo/bar");

    assert!(validator.validate_update(&old, &new).await.is_err());
}
