//! End-to-end seeding behaviour over the in-memory fixture store.

use std::sync::Arc;

use backend::domain::ports::{Collection, FixtureDemoDataStore};
use backend::domain::{DemoDataSeeder, PersistenceGateway, SeedOptions};
use demo_data::{
    DistributionReport, GeneratorConfig, Role, validate_faculty, validate_students, validate_users,
};
use rstest::rstest;

fn seeder_over(
    store: &Arc<FixtureDemoDataStore>,
    config: GeneratorConfig,
) -> DemoDataSeeder<FixtureDemoDataStore> {
    DemoDataSeeder::new(PersistenceGateway::new(Arc::clone(store)), config)
}

#[rstest]
#[case::default_run(50, 10)]
#[case::large_run(200, 40)]
#[tokio::test]
async fn seeded_batches_pass_every_validator(#[case] students: usize, #[case] faculty: usize) {
    let store = Arc::new(FixtureDemoDataStore::new());
    let config = GeneratorConfig {
        student_count: students,
        faculty_count: faculty,
        ..GeneratorConfig::default()
    };

    seeder_over(&store, config)
        .seed(SeedOptions {
            seed: Some(17),
            wipe_first: false,
        })
        .await
        .expect("seeding succeeds");

    assert!(validate_users(&store.users()).is_empty());
    assert!(validate_students(&store.students()).is_empty());
    assert!(validate_faculty(&store.faculty()).is_empty());
}

#[rstest]
#[tokio::test]
async fn every_profile_references_a_stored_user() {
    let store = Arc::new(FixtureDemoDataStore::new());
    seeder_over(&store, GeneratorConfig::default())
        .seed(SeedOptions {
            seed: Some(23),
            wipe_first: false,
        })
        .await
        .expect("seeding succeeds");

    let report = PersistenceGateway::new(Arc::clone(&store))
        .verify_referential_integrity()
        .await;
    assert!(report.is_consistent(), "unexpected: {:?}", report.errors);

    let users = store.users();
    for student in store.students() {
        let owner = users
            .iter()
            .find(|u| u.id == student.user_id)
            .expect("backing user exists");
        assert_eq!(owner.role, Role::Student);
    }
    for member in store.faculty() {
        let owner = users
            .iter()
            .find(|u| u.id == member.user_id)
            .expect("backing user exists");
        assert_eq!(owner.role, Role::Faculty);
    }
}

#[rstest]
#[tokio::test]
async fn wipe_then_reseed_replaces_the_data_set() {
    let store = Arc::new(FixtureDemoDataStore::new());
    let seeder = seeder_over(&store, GeneratorConfig::default());

    seeder
        .seed(SeedOptions {
            seed: Some(1),
            wipe_first: false,
        })
        .await
        .expect("first run");
    let first_emails: Vec<String> = store.users().iter().map(|u| u.email.clone()).collect();

    let outcome = seeder
        .seed(SeedOptions {
            seed: Some(2),
            wipe_first: true,
        })
        .await
        .expect("second run");

    let wiped = outcome.wiped.expect("wipe counts recorded");
    assert_eq!(wiped.len(), Collection::WIPE_ORDER.len());

    let second_emails: Vec<String> = store.users().iter().map(|u| u.email.clone()).collect();
    assert_eq!(second_emails.len(), first_emails.len());
    assert_ne!(second_emails, first_emails);
}

#[rstest]
#[tokio::test]
async fn distribution_report_reflects_the_stored_batches() {
    let store = Arc::new(FixtureDemoDataStore::new());
    seeder_over(&store, GeneratorConfig::default())
        .seed(SeedOptions {
            seed: Some(31),
            wipe_first: false,
        })
        .await
        .expect("seeding succeeds");

    let users = store.users();
    let students = store.students();
    let faculty = store.faculty();
    let report = DistributionReport::from_batches(&users, &students, &faculty);

    assert_eq!(report.total_users, users.len());
    assert_eq!(
        report.users_by_role.get("student").copied().unwrap_or(0),
        students.len()
    );
    assert_eq!(
        report.users_by_role.get("faculty").copied().unwrap_or(0),
        faculty.len()
    );
    assert!(report.users_by_role.get("admin").copied().unwrap_or(0) >= 1);

    let lines = report.render_lines();
    assert!(lines.iter().any(|l| l.starts_with("total_users=")));
    assert!(lines.iter().any(|l| l.starts_with("students.department.")));
}
