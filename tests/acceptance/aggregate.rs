use roster::{
    data::{department_aggregate::DepartmentAggregateRepository, employee::EmployeeRepository},
    service::department::{DepartmentService, BONNIE_NAME, CLYDE_NAME, SALES_NAME},
};
use roster_test_utils::prelude::*;

#[tokio::test]
async fn create_department_with_employees_and_read_aggregate_back() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_id = 8;
    test.employee().clean_up_employee(5).await?;
    test.employee().clean_up_employee(6).await?;
    test.department().clean_up_department(department_id).await?;

    DepartmentService::new(&test.db)
        .create_department_with_employees(department_id, 5, 6)
        .await
        .expect("Failed to create department with employees");

    let aggregate = DepartmentAggregateRepository::new(&test.db)
        .find_one(department_id)
        .await?
        .expect("Aggregate should exist");
    assert_eq!(aggregate.name, SALES_NAME);
    assert_eq!(aggregate.employees.len(), 2);

    let bonnie = aggregate
        .find_employee_by_name(BONNIE_NAME)
        .expect("Bonnie should be listed");
    assert_eq!(bonnie.department_id, department_id);
    let clyde = aggregate
        .find_employee_by_name(CLYDE_NAME)
        .expect("Clyde should be listed");
    assert_eq!(clyde.department_id, department_id);

    Ok(())
}

#[tokio::test]
async fn aggregate_reflects_employee_rename() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;

    let department_service = DepartmentService::new(&test.db);
    department_service
        .create_department_with_employees(4, 1, 2)
        .await
        .expect("Failed to create department with employees");
    let before = department_service
        .find_department_aggregate(4)
        .await
        .expect("Failed to read aggregate")
        .expect("Aggregate should exist");

    let mut bonnie = before
        .find_employee_by_name(BONNIE_NAME)
        .cloned()
        .expect("Bonnie should be listed");
    bonnie.name = "Bonnie2".to_string();
    EmployeeRepository::new(&test.db)
        .save(bonnie)
        .await?;

    let after = department_service
        .find_department_aggregate(4)
        .await
        .expect("Failed to read aggregate")
        .expect("Aggregate should exist");
    assert!(after.find_employee_by_name("Bonnie2").is_some());
    assert!(after.find_employee_by_name(CLYDE_NAME).is_some());
    assert_eq!(after.name, SALES_NAME);

    Ok(())
}

/// Repeats the create, read and clean-up cycle to check no state leaks between cycles
#[tokio::test]
async fn repeated_create_and_read_cycles() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_service = DepartmentService::new(&test.db);
    let aggregate_repo = DepartmentAggregateRepository::new(&test.db);

    for _ in 0..100 {
        let department_id = 4;
        test.employee().clean_up_employee(1).await?;
        test.employee().clean_up_employee(2).await?;
        test.department().clean_up_department(department_id).await?;

        department_service
            .create_department_with_employees(department_id, 1, 2)
            .await
            .expect("Failed to create department with employees");

        let aggregate = aggregate_repo
            .find_one(department_id)
            .await?
            .expect("Aggregate should exist");
        assert_eq!(aggregate.name, SALES_NAME);
        assert_eq!(aggregate.employees.len(), 2);
        assert!(aggregate.find_employee_by_name(BONNIE_NAME).is_some());
        assert!(aggregate.find_employee_by_name(CLYDE_NAME).is_some());
    }

    Ok(())
}
