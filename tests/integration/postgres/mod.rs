//! Production store tests against PostgreSQL
//!
//! Each test uses fresh user ids and removes its rows afterwards, so the
//! suite can share a database with other runs.

use std::sync::Arc;

use chrono::Utc;
use sqlx::types::Json;

use carebridge_conversations::{Conversation, ConversationRepository, ConversationStore, MemberPair};
use carebridge_notifications::{
    NewNotification, Notification, NotificationRepository, NotificationService, NotificationStore,
    NotificationType,
};
use carebridge_profiles::{
    DoctorProfile, OfflineAvailability, ProfileDirectory, ProfileRepository, ProfileSource,
};

use crate::common::{unique_id, PgTestApp};

fn notification(user_id: &str, message: &str) -> Notification {
    Notification::new(NewNotification {
        user_id: user_id.to_string(),
        message: message.to_string(),
        ..Default::default()
    })
    .unwrap()
}

mod test_conversation_repository {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_concurrent_find_or_create_inserts_one_row() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let a = unique_id("u");
        let b = unique_id("u");
        let repo = ConversationRepository::new(app.pool.clone());

        let mut handles = Vec::new();
        for i in 0..16 {
            let repo = repo.clone();
            let ids = if i % 2 == 0 {
                vec![a.clone(), b.clone()]
            } else {
                vec![b.clone(), a.clone()]
            };
            handles.push(tokio::spawn(async move {
                let pair = MemberPair::new(&ids).unwrap();
                repo.find_or_create(&Conversation::new(&pair)).await.unwrap()
            }));
        }

        let mut results = Vec::new();
        for h in handles {
            results.push(h.await.unwrap());
        }

        let first_id = results[0].conversation.id;
        assert!(results.iter().all(|r| r.conversation.id == first_id));
        assert_eq!(results.iter().filter(|r| r.created).count(), 1);

        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM conversations WHERE id = $1")
            .bind(first_id)
            .fetch_one(&app.pool)
            .await
            .unwrap();
        assert_eq!(rows, 1);

        app.cleanup(&[a, b]).await;
    }

    #[tokio::test]
    async fn test_list_by_member_orders_by_latest_activity() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let owner = unique_id("doc");
        let p1 = unique_id("pat");
        let p2 = unique_id("pat");
        let repo = ConversationRepository::new(app.pool.clone());

        let older = repo
            .find_or_create(&Conversation::new(
                &MemberPair::new(&[owner.clone(), p1.clone()]).unwrap(),
            ))
            .await
            .unwrap()
            .conversation;
        let newer = repo
            .find_or_create(&Conversation::new(
                &MemberPair::new(&[owner.clone(), p2.clone()]).unwrap(),
            ))
            .await
            .unwrap()
            .conversation;

        let updated = repo
            .record_message(older.id, "Bring your reports", Utc::now())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.last_message.as_deref(), Some("Bring your reports"));

        let listed = repo.list_by_member(&owner).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![older.id, newer.id]);

        let for_p2 = repo.list_by_member(&p2).await.unwrap();
        assert_eq!(for_p2.len(), 1);
        assert_eq!(for_p2[0].id, newer.id);

        app.cleanup(&[owner, p1, p2]).await;
    }

    #[tokio::test]
    async fn test_record_message_unknown_id_is_none() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let repo = ConversationRepository::new(app.pool.clone());

        let result = repo
            .record_message(uuid::Uuid::new_v4(), "hello", Utc::now())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}

mod test_notification_repository {
    use super::*;

    #[tokio::test]
    async fn test_every_type_round_trips() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let user = unique_id("u");
        let repo = NotificationRepository::new(app.pool.clone());

        for kind in NotificationType::ALL {
            let mut n = notification(&user, &format!("{} notification", kind));
            n.kind = kind;
            let stored = repo.create(&n).await.unwrap();
            assert_eq!(stored.kind, kind);
        }

        let kinds: Vec<_> = repo
            .list_by_user(&user)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.kind)
            .collect();
        assert_eq!(kinds, NotificationType::ALL.to_vec());

        app.cleanup(&[user]).await;
    }

    #[tokio::test]
    async fn test_duplicate_id_is_conflict() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let user = unique_id("u");
        let repo = NotificationRepository::new(app.pool.clone());

        let n = notification(&user, "once");
        repo.create(&n).await.unwrap();
        let err = repo.create(&n).await.unwrap_err();
        assert_eq!(err.status_code().as_u16(), 409);

        app.cleanup(&[user]).await;
    }

    #[test_log::test(tokio::test)]
    async fn test_second_page_of_25_unread() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let user = unique_id("u");
        let service =
            NotificationService::new(Arc::new(NotificationRepository::new(app.pool.clone())));

        for i in 0..25 {
            service
                .create_notification(NewNotification {
                    user_id: user.clone(),
                    message: format!("Notification {}", i),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let page = service
            .new_notifications(Some(&user), Some(10), Some(2))
            .await
            .unwrap();
        assert_eq!(page.total_pages, 3);
        let messages: Vec<String> = page.notifications.into_iter().map(|n| n.message).collect();
        let expected: Vec<String> = (10..20).map(|i| format!("Notification {}", i)).collect();
        assert_eq!(messages, expected);

        app.cleanup(&[user]).await;
    }

    #[tokio::test]
    async fn test_identical_timestamps_keep_insertion_order() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let user = unique_id("u");
        let repo = NotificationRepository::new(app.pool.clone());
        let at = Utc::now();

        for i in 0..10 {
            let mut n = notification(&user, &format!("tick {}", i));
            n.created_at = at;
            n.date = at;
            repo.create(&n).await.unwrap();
        }

        let messages: Vec<String> = repo
            .list_page(&user, 0, 10)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.message)
            .collect();
        let expected: Vec<String> = (0..10).map(|i| format!("tick {}", i)).collect();
        assert_eq!(messages, expected);

        app.cleanup(&[user]).await;
    }

    #[tokio::test]
    async fn test_mark_all_read_clears_unread_count() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let user = unique_id("u");
        let other = unique_id("u");
        let repo = NotificationRepository::new(app.pool.clone());

        for i in 0..4 {
            repo.create(&notification(&user, &format!("m{}", i)))
                .await
                .unwrap();
        }
        repo.create(&notification(&other, "untouched")).await.unwrap();

        assert_eq!(repo.count_unread(&user).await.unwrap(), 4);
        assert_eq!(repo.mark_all_read(&user).await.unwrap(), 4);
        assert_eq!(repo.count_unread(&user).await.unwrap(), 0);
        assert_eq!(repo.mark_all_read(&user).await.unwrap(), 0);
        assert_eq!(repo.count_unread(&other).await.unwrap(), 1);

        app.cleanup(&[user, other]).await;
    }
}

mod test_profile_repository {
    use super::*;

    async fn insert_doctor(app: &PgTestApp, id: &str, with_clinic: bool) {
        let offline = with_clinic.then(|| {
            Json(OfflineAvailability {
                clinic_name: "Heart Care Clinic".to_string(),
                address: "12 MG Road, Pune".to_string(),
                timings: "Mon-Fri 10:00-14:00".to_string(),
            })
        });
        sqlx::query(
            r#"
            INSERT INTO doctors (
                id, name, avatar_key, specialization,
                experience_years, consultation_fee, about, offline_availability
            )
            VALUES ($1, $2, $3, 'Cardiology', 12, 500, NULL, $4)
            "#,
        )
        .bind(id)
        .bind(format!("Dr. {}", id))
        .bind(format!("avatars/{}.png", id))
        .bind(offline)
        .execute(&app.pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_find_members_matches_requested_ids_only() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let d1 = unique_id("doc");
        let d2 = unique_id("doc");
        let patient = unique_id("pat");
        insert_doctor(&app, &d1, false).await;
        insert_doctor(&app, &d2, false).await;
        sqlx::query("INSERT INTO patients (id, name) VALUES ($1, 'Ravi Kumar')")
            .bind(&patient)
            .execute(&app.pool)
            .await
            .unwrap();

        let repo = ProfileRepository::new(app.pool.clone());

        let mut doctors: Vec<String> = repo
            .find_members(
                ProfileSource::Doctor,
                &[d1.clone(), patient.clone(), unique_id("ghost")],
            )
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.id)
            .collect();
        doctors.sort();
        assert_eq!(doctors, vec![d1.clone()]);

        let patients = repo
            .find_members(ProfileSource::Patient, &[d1.clone(), patient.clone()])
            .await
            .unwrap();
        assert_eq!(patients.len(), 1);
        assert_eq!(patients[0].name, "Ravi Kumar");
        assert!(patients[0].avatar_key.is_none());

        assert!(repo
            .find_members(ProfileSource::Doctor, &[])
            .await
            .unwrap()
            .is_empty());

        app.cleanup(&[d1, d2, patient]).await;
    }

    #[tokio::test]
    async fn test_find_doctor_decodes_offline_availability() {
        let Some(app) = PgTestApp::connect().await else {
            return;
        };
        let id = unique_id("doc");
        insert_doctor(&app, &id, true).await;
        let repo = ProfileRepository::new(app.pool.clone());

        let doctor: DoctorProfile = repo.find_doctor(&id).await.unwrap().unwrap();
        assert_eq!(doctor.experience_years, 12);
        let Json(offline) = doctor.offline_availability.unwrap();
        assert_eq!(offline.clinic_name, "Heart Care Clinic");

        assert!(repo
            .find_doctor(&unique_id("ghost"))
            .await
            .unwrap()
            .is_none());

        app.cleanup(&[id]).await;
    }
}
