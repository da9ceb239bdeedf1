use roster_test_utils::prelude::*;

use crate::{
    error::Error,
    service::department::{
        DepartmentService, BONNIE_NAME, CLYDE_NAME, SALES_NAME, SALES_NAME_2,
    },
};
