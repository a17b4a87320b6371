use qorehr_domain::CrudFlags;

use super::*;

const DESIGNATIONS: [(&str, &str); 5] = [
    ("Chief Executive Officer", "CEO"),
    ("HR Manager", "HRM"),
    ("Recruiter", "REC"),
    ("Software Engineer", "SWE"),
    ("Accountant", "ACC"),
];

// (name, slug, description, priority, is_system)
const ROLES: [(&str, &str, &str, i32, bool); 5] = [
    ("Super Admin", "super-admin", "Unrestricted access", 100, true),
    ("Admin", "admin", "Company administration", 90, true),
    ("HR Manager", "hr-manager", "People operations", 50, false),
    ("Recruiter", "recruiter", "Hiring pipeline", 40, false),
    ("Employee", "employee", "Self service", 10, true),
];

const CATEGORIES: [(&str, &str); 7] = [
    ("Employees", "employees"),
    ("Branches", "branches"),
    ("Departments", "departments"),
    ("Roles & Permissions", "roles"),
    ("Job Postings", "job_postings"),
    ("Interview Screenings", "screenings"),
    ("Call Insights", "call_insights"),
];

// (menu, icon, lang_key)
const MENUS: [(&str, &str, &str); 3] = [
    ("Human Resources", "users", "human_resources"),
    ("Recruitment", "briefcase", "recruitment"),
    ("Administration", "settings", "administration"),
];

// (menu, category, sub_menu, url, lang_key)
const SUB_MENUS: [(&str, &str, &str, &str, &str); 7] = [
    ("Human Resources", "employees", "Employee Directory", "/employees", "employee_directory"),
    ("Human Resources", "departments", "Departments", "/departments", "departments"),
    ("Recruitment", "job_postings", "Job Postings", "/newjobs", "job_postings"),
    ("Recruitment", "screenings", "Interview Screenings", "/screenings", "interview_screenings"),
    ("Recruitment", "call_insights", "Call Insights", "/qoreai", "call_insights"),
    ("Administration", "branches", "Branches", "/branches", "branches"),
    ("Administration", "roles", "Roles & Permissions", "/roles", "roles_permissions"),
];

// (role slug, category, can_write)
const GRANTS: [(&str, &str, bool); 11] = [
    ("admin", "employees", true),
    ("admin", "branches", true),
    ("admin", "departments", true),
    ("admin", "roles", true),
    ("hr-manager", "employees", true),
    ("hr-manager", "departments", true),
    ("hr-manager", "job_postings", false),
    ("recruiter", "job_postings", true),
    ("recruiter", "screenings", true),
    ("recruiter", "call_insights", false),
    ("employee", "employees", false),
];

impl HrState {
    /// Loads the same catalog the relational seed migration installs.
    pub(super) fn seed_default_catalog(&mut self) {
        for (name, short_code) in DESIGNATIONS {
            let id = DesignationId::new(self.allocate("designations"));
            self.designations.insert(
                id,
                Designation {
                    id,
                    name: name.to_owned(),
                    short_code: Some(short_code.to_owned()),
                    description: None,
                },
            );
        }

        let mut role_ids = HashMap::new();
        for (name, slug, description, priority, is_system) in ROLES {
            let id = RoleId::new(self.allocate("roles"));
            role_ids.insert(slug, id);
            self.roles.insert(
                id,
                Role {
                    id,
                    name: name.to_owned(),
                    slug: slug.to_owned(),
                    description: Some(description.to_owned()),
                    priority,
                    is_system,
                    is_active: true,
                },
            );
        }

        let mut category_ids = HashMap::new();
        for (name, short_code) in CATEGORIES {
            let id = PermissionCategoryId::new(self.allocate("permission_categories"));
            category_ids.insert(short_code, id);
            self.categories.insert(
                id,
                PermissionCategory {
                    id,
                    name: name.to_owned(),
                    short_code: Some(short_code.to_owned()),
                    description: None,
                },
            );
        }

        let mut menu_ids = HashMap::new();
        for (display_order, (menu, icon, lang_key)) in (1..).zip(MENUS) {
            let id = SidebarMenuId::new(self.allocate("sidebar_menus"));
            menu_ids.insert(menu, id);
            self.menus.insert(
                id,
                SidebarMenu {
                    id,
                    menu: menu.to_owned(),
                    icon: Some(icon.to_owned()),
                    url: Some("#".to_owned()),
                    lang_key: Some(lang_key.to_owned()),
                    display_order,
                    level: 0,
                    is_active: true,
                    sidebar_display: true,
                },
            );
        }

        let mut positions: HashMap<&str, i32> = HashMap::new();
        for (menu, category, sub_menu, url, lang_key) in SUB_MENUS {
            let (Some(&sidebar_menu_id), Some(&category_id)) =
                (menu_ids.get(menu), category_ids.get(category))
            else {
                continue;
            };
            let display_order = positions.entry(menu).or_insert(0);
            *display_order += 1;

            let id = SidebarSubMenuId::new(self.allocate("sidebar_sub_menus"));
            self.sub_menus.insert(
                id,
                SidebarSubMenu {
                    id,
                    sidebar_menu_id,
                    permission_category_id: Some(category_id),
                    sub_menu: sub_menu.to_owned(),
                    icon: None,
                    url: Some(url.to_owned()),
                    lang_key: Some(lang_key.to_owned()),
                    display_order: *display_order,
                    level: 1,
                    is_active: true,
                    sidebar_display: true,
                },
            );
        }

        for (slug, category, can_write) in GRANTS {
            let (Some(&role_id), Some(&permission_category_id)) =
                (role_ids.get(slug), category_ids.get(category))
            else {
                continue;
            };

            let id = PermissionEntryId::new(self.allocate("role_permissions"));
            self.entries.insert(
                id,
                PermissionEntry {
                    id,
                    role_id,
                    permission_category_id,
                    flags: CrudFlags {
                        can_view: true,
                        can_add: can_write,
                        can_edit: can_write,
                        can_delete: can_write,
                    },
                    is_active: true,
                },
            );
        }
    }
}
