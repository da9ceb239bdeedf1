use roster::{
    data::{department::DepartmentRepository, employee::EmployeeRepository},
    service::department::{
        DepartmentService, BONNIE_NAME, CLYDE_NAME, SALES_NAME, SALES_NAME_2,
    },
};
use roster_test_utils::prelude::*;

#[tokio::test]
async fn create_department_and_read_it_back() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_id = 1;
    test.department().clean_up_department(department_id).await?;

    DepartmentService::new(&test.db)
        .create_department(department_id)
        .await
        .expect("Failed to create department");

    let department = DepartmentRepository::new(&test.db)
        .find_one(department_id)
        .await?;
    assert!(department.is_some());
    assert_eq!(department.unwrap().name, SALES_NAME);

    Ok(())
}

#[tokio::test]
async fn update_department_and_read_it_back() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_id = 2;
    test.department().clean_up_department(department_id).await?;

    let department_service = DepartmentService::new(&test.db);
    department_service
        .create_department(department_id)
        .await
        .expect("Failed to create department");
    department_service
        .update_department(department_id)
        .await
        .expect("Failed to update department");

    let department = DepartmentRepository::new(&test.db)
        .find_one(department_id)
        .await?;
    assert!(department.is_some());
    assert_eq!(department.unwrap().name, SALES_NAME_2);

    Ok(())
}

#[tokio::test]
async fn delete_department_and_read_it_back() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_id = 3;
    test.department().clean_up_department(department_id).await?;

    let department_service = DepartmentService::new(&test.db);
    department_service
        .create_department(department_id)
        .await
        .expect("Failed to create department");
    department_service
        .delete_department(department_id)
        .await
        .expect("Failed to delete department");

    let department = DepartmentRepository::new(&test.db)
        .find_one(department_id)
        .await?;
    assert!(department.is_none());

    Ok(())
}

#[tokio::test]
async fn create_department_with_employees_and_read_it_back() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_id = 4;
    test.employee().clean_up_employee(1).await?;
    test.employee().clean_up_employee(2).await?;
    test.department().clean_up_department(department_id).await?;

    DepartmentService::new(&test.db)
        .create_department_with_employees(department_id, 1, 2)
        .await
        .expect("Failed to create department with employees");

    let department = DepartmentRepository::new(&test.db)
        .find_one(department_id)
        .await?
        .expect("Department should exist");
    assert_eq!(department.name, SALES_NAME);

    let employee_repo = EmployeeRepository::new(&test.db);
    let employees = employee_repo.find_by_department(&department).await?;
    assert_eq!(employees.len(), 2);

    let bonnie = employees
        .iter()
        .find(|employee| employee.name == BONNIE_NAME)
        .expect("Bonnie should be listed");
    assert_eq!(bonnie.department_id, department_id);
    let clyde = employees
        .iter()
        .find(|employee| employee.name == CLYDE_NAME)
        .expect("Clyde should be listed");
    assert_eq!(clyde.department_id, department_id);

    // Back-references resolve to the same department with its current name
    for employee in &employees {
        let owner = employee_repo.find_department(employee).await?;
        assert_eq!(owner.as_ref().map(|d| d.id), Some(department_id));
        assert_eq!(owner.map(|d| d.name), Some(SALES_NAME.to_string()));
    }

    Ok(())
}

#[tokio::test]
async fn update_employee_via_department() -> Result<(), TestError> {
    let test = test_setup_with_roster_tables!()?;
    let department_id = 7;
    test.employee().clean_up_employee(3).await?;
    test.employee().clean_up_employee(4).await?;
    test.department().clean_up_department(department_id).await?;

    DepartmentService::new(&test.db)
        .create_department_with_employees(department_id, 3, 4)
        .await
        .expect("Failed to create department with employees");
    let department = DepartmentRepository::new(&test.db)
        .find_one(department_id)
        .await?
        .expect("Department should exist");
    let employee_repo = EmployeeRepository::new(&test.db);
    let mut employees = employee_repo.find_by_department(&department).await?;

    let bonnie = employees
        .iter_mut()
        .find(|employee| employee.name == BONNIE_NAME)
        .expect("Bonnie should be listed");
    bonnie.name = "Bonnie2".to_string();
    employee_repo.save(bonnie.clone()).await?;

    // The list fetched before the save reflects the rename, Clyde is unchanged
    assert_eq!(employees.len(), 2);
    let bonnie2 = employees
        .iter()
        .find(|employee| employee.name == "Bonnie2")
        .expect("Bonnie2 should be listed");
    assert_eq!(bonnie2.department_id, department_id);
    let clyde = employees
        .iter()
        .find(|employee| employee.name == CLYDE_NAME)
        .expect("Clyde should be listed");
    assert_eq!(clyde.department_id, department_id);

    // And so does the stored row, without any department write
    let stored = employee_repo.find_one(bonnie2.id).await?.unwrap();
    assert_eq!(stored.name, "Bonnie2");

    Ok(())
}
