use super::*;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_empty_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session naming a missing user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase) with the stale id
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    match result {
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(id))) => assert_eq!(id, 4242),
        other => panic!("Expected UserNotInDatabase, got: {:?}", other),
    }

    Ok(())
}

/// Tests that an authenticated user passes an empty permission list.
///
/// Expected: Ok(CurrentUser) matching the stored user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Reader")
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let current = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(current.id, user.id);
    assert_eq!(current.name, "Reader");
    assert_eq!(current.role, Role::User);

    Ok(())
}

/// Tests that a plain user cannot manage team content.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_manage_to_user_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, member) = factory::helpers::create_team_with_member(db, "user").await?;
    AuthSession::new(session).set_user_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Team, Permission::Manage])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(id, message))) => {
            assert_eq!(id, member.id);
            assert!(message.contains("manage"));
        }
        other => panic!("Expected AccessDenied, got: {:?}", other),
    }

    Ok(())
}

/// Tests that only root passes the root permission.
///
/// Expected: Ok for root, Err(AuthError::AccessDenied) for admin
#[tokio::test]
async fn root_permission_requires_root_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let (_, admin) = factory::helpers::create_team_with_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;
    let denied = AuthGuard::new(db, session).require(&[Permission::Root]).await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    let (_, root) = factory::helpers::create_team_with_member(db, "root").await?;
    AuthSession::new(session).set_user_id(root.id).await?;
    let granted = AuthGuard::new(db, session).require(&[Permission::Root]).await?;
    assert_eq!(granted.role, Role::Root);

    Ok(())
}

/// Tests that a user without a team fails the team permission.
///
/// Expected: Err(AuthError::NoTeam)
#[tokio::test]
async fn team_permission_requires_membership() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_tenant_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let loner = factory::user::UserFactory::new(db).role("admin").build().await?;
    AuthSession::new(session).set_user_id(loner.id).await?;

    let result = AuthGuard::new(db, session).require(&[Permission::Team]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NoTeam(_)))
    ));

    Ok(())
}
