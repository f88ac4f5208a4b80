use super::*;

/// Tests that a read-only actor is resolved for a plain team member.
///
/// Expected: Ok(Actor) carrying the member's team
#[tokio::test]
async fn resolves_reader_actor() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (team, member) = factory::helpers::create_team_with_member(db, "user").await?;
    AuthSession::new(session).set_user_id(member.id).await?;

    let actor = AuthGuard::new(db, session).require_actor(false).await?;

    assert_eq!(actor.user_id, member.id);
    assert_eq!(actor.team_id, team.id);
    assert_eq!(actor.role, Role::User);

    Ok(())
}

/// Tests that a writing actor must be able to manage content.
///
/// Expected: Err(AuthError::AccessDenied) for a plain member
#[tokio::test]
async fn writer_actor_requires_manage() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, member) = factory::helpers::create_team_with_member(db, "user").await?;
    AuthSession::new(session).set_user_id(member.id).await?;

    let result = AuthGuard::new(db, session).require_actor(true).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: Err(AuthError::UserNotInSession) after clear
#[tokio::test]
async fn cleared_session_is_anonymous() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, admin) = factory::helpers::create_team_with_admin(db).await?;
    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(admin.id).await?;
    auth_session.clear().await;

    let result = AuthGuard::new(db, session).require_actor(false).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
    assert!(!auth_session.is_authenticated().await?);

    Ok(())
}
