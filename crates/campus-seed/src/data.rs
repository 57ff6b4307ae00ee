//! Reference data for the portal: the baseline departments and the role catalogue
//! behind the role-based dashboards.

use campus_db::model::department::NewDepartment;
use campus_db::model::role::NewRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepartmentSeed {
    pub name: &'static str,
    pub faculty: &'static str,
}

impl DepartmentSeed {
    #[must_use]
    pub fn to_new_department(&self) -> NewDepartment<'static> {
        NewDepartment {
            name: self.name,
            faculty: self.faculty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleSeed {
    pub name: &'static str,
    pub label: &'static str,
    pub color_class: &'static str,
    pub permissions: &'static [&'static str],
}

impl RoleSeed {
    #[must_use]
    pub fn to_new_role(&self) -> NewRole<'static> {
        NewRole {
            name: self.name,
            label: self.label,
            color_class: self.color_class,
            permissions: self.permissions.iter().map(ToString::to_string).collect(),
        }
    }
}

pub const DEPARTMENTS: &[DepartmentSeed] = &[
    DepartmentSeed {
        name: "Computer Science",
        faculty: "Engineering",
    },
    DepartmentSeed {
        name: "Mathematics",
        faculty: "Science",
    },
];

pub const ROLES: &[RoleSeed] = &[
    RoleSeed {
        name: "admin",
        label: "Administrator",
        color_class: "bg-red-100 text-red-800",
        permissions: &[
            "Manage users",
            "Manage roles",
            "Manage departments",
            "Manage courses",
            "Manage announcements",
            "View reports",
            "View audit logs",
            "System settings",
        ],
    },
    RoleSeed {
        name: "teacher",
        label: "Teacher",
        color_class: "bg-blue-100 text-blue-800",
        permissions: &[
            "Manage own courses",
            "Create assignments",
            "Grade submissions",
            "Record attendance",
            "Post announcements",
            "Share resources",
        ],
    },
    RoleSeed {
        name: "student",
        label: "Student",
        color_class: "bg-green-100 text-green-800",
        permissions: &[
            "View courses",
            "Enroll in courses",
            "Submit assignments",
            "View grades",
            "View attendance",
            "Access resources",
        ],
    },
    RoleSeed {
        name: "parent",
        label: "Parent",
        color_class: "bg-yellow-100 text-yellow-800",
        permissions: &[
            "View child grades",
            "View child attendance",
            "View announcements",
            "Message teachers",
        ],
    },
    RoleSeed {
        name: "employee",
        label: "Employee",
        color_class: "bg-gray-100 text-gray-800",
        permissions: &[
            "View announcements",
            "Access resources",
            "Submit requests",
        ],
    },
    RoleSeed {
        name: "finance",
        label: "Finance",
        color_class: "bg-emerald-100 text-emerald-800",
        permissions: &[
            "Manage fees",
            "Record payments",
            "Issue invoices",
            "View financial reports",
        ],
    },
    RoleSeed {
        name: "registrar",
        label: "Registrar",
        color_class: "bg-indigo-100 text-indigo-800",
        permissions: &[
            "Manage enrollments",
            "Manage student records",
            "Issue transcripts",
            "Manage academic calendar",
        ],
    },
    RoleSeed {
        name: "examination",
        label: "Examination",
        color_class: "bg-orange-100 text-orange-800",
        permissions: &[
            "Schedule exams",
            "Record exam results",
            "Publish results",
            "Manage grading scales",
        ],
    },
    RoleSeed {
        name: "hr",
        label: "Human Resources",
        color_class: "bg-pink-100 text-pink-800",
        permissions: &[
            "Manage employees",
            "Manage payroll",
            "Approve leave requests",
            "Manage recruitment",
        ],
    },
    RoleSeed {
        name: "graduated",
        label: "Graduated",
        color_class: "bg-purple-100 text-purple-800",
        permissions: &[
            "View transcripts",
            "Request certificates",
            "Access alumni network",
        ],
    },
    RoleSeed {
        name: "leader",
        label: "Class Leader",
        color_class: "bg-teal-100 text-teal-800",
        permissions: &[
            "View courses",
            "Enroll in courses",
            "Submit assignments",
            "View grades",
            "View attendance",
            "Access resources",
            "Post class announcements",
            "Record class attendance",
            "Coordinate class activities",
            "Report class issues",
        ],
    },
];
