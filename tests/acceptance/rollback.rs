use roster::{
    data::department::DepartmentRepository, error::Error, service::department::DepartmentService,
};
use roster_test_utils::prelude::*;

#[tokio::test]
async fn rollback_on_error() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let (first_department_id, second_department_id) = (5, 6);
    test.department().clean_up_department(first_department_id).await?;
    test.department().clean_up_department(second_department_id).await?;

    let result = DepartmentService::new(&test.db)
        .demonstrate_rollback(first_department_id, second_department_id)
        .await;

    assert!(matches!(result, Err(Error::TransactionAborted { .. })));
    let department = DepartmentRepository::new(&test.db)
        .find_one(first_department_id)
        .await?;
    assert!(department.is_none());

    Ok(())
}

#[tokio::test]
async fn cascade_delete_leaves_no_employees() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let department_service = DepartmentService::new(&test.db);
    department_service
        .create_department_with_employees(4, 1, 2)
        .await
        .expect("Failed to create department with employees");
    department_service
        .delete_department(4)
        .await
        .expect("Failed to delete department");

    assert_eq!(test.employee().count_for_department(4).await?, 0);
    assert!(department_service
        .find_department_aggregate(4)
        .await
        .expect("Failed to read aggregate")
        .is_none());

    Ok(())
}
