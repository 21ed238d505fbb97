//! The fixed rewrite set for `TeacherController.java`.

use crate::endpoint::EndpointRewrite;
use crate::error::RuleError;
use crate::rule::PatchRule;

/// File the binary patches in place.
pub const TARGET_PATH: &str = "D:/Project/IdeaProjects/EduSphere/EduSphereB/src/main/java/top/ooyyh/edusphere/controller/TeacherController.java";

/// Printed once the file has been written back.
pub const SUCCESS_MESSAGE: &str = "TeacherController修复完成！";

/// Endpoints to rewrite, in application order.
pub const TEACHER_CONTROLLER_ENDPOINTS: [EndpointRewrite; 13] = [
    // courses
    EndpointRewrite {
        return_type: "Result<Course>",
        method: "updateCourse",
        params: "@PathVariable Integer courseId, @RequestBody CourseCreateRequest request",
        prelude: None,
        call_args: "courseId, request",
    },
    EndpointRewrite {
        return_type: "Result<String>",
        method: "deleteCourse",
        params: "@PathVariable Integer courseId",
        prelude: None,
        call_args: "courseId",
    },
    EndpointRewrite {
        return_type: "Result<String>",
        method: "publishCourse",
        params: "@PathVariable Integer courseId",
        prelude: None,
        call_args: "courseId",
    },
    EndpointRewrite {
        return_type: "Result<String>",
        method: "unpublishCourse",
        params: "@PathVariable Integer courseId",
        prelude: None,
        call_args: "courseId",
    },
    // sections
    EndpointRewrite {
        return_type: "Result<List<CourseSection>>",
        method: "getCourseSections",
        params: "@PathVariable Integer courseId",
        prelude: None,
        call_args: "courseId",
    },
    EndpointRewrite {
        return_type: "Result<CourseSection>",
        method: "createSection",
        params: "@PathVariable Integer courseId, @RequestBody SectionCreateRequest request",
        prelude: Some("request.setCourseId(courseId);"),
        call_args: "request",
    },
    EndpointRewrite {
        return_type: "Result<CourseSection>",
        method: "updateSection",
        params: "@PathVariable Integer sectionId, @RequestBody SectionCreateRequest request",
        prelude: None,
        call_args: "sectionId, request",
    },
    EndpointRewrite {
        return_type: "Result<String>",
        method: "deleteSection",
        params: "@PathVariable Integer sectionId",
        prelude: None,
        call_args: "sectionId",
    },
    // lessons
    EndpointRewrite {
        return_type: "Result<List<CourseLesson>>",
        method: "getSectionLessons",
        params: "@PathVariable Integer sectionId",
        prelude: None,
        call_args: "sectionId",
    },
    EndpointRewrite {
        return_type: "Result<CourseLesson>",
        method: "createLesson",
        params: "@PathVariable Integer sectionId, @RequestBody LessonCreateRequest request",
        prelude: Some("request.setSectionId(sectionId);"),
        call_args: "request",
    },
    EndpointRewrite {
        return_type: "Result<CourseLesson>",
        method: "updateLesson",
        params: "@PathVariable Integer lessonId, @RequestBody LessonCreateRequest request",
        prelude: None,
        call_args: "lessonId, request",
    },
    EndpointRewrite {
        return_type: "Result<String>",
        method: "deleteLesson",
        params: "@PathVariable Integer lessonId",
        prelude: None,
        call_args: "lessonId",
    },
    // stats
    EndpointRewrite {
        return_type: "Result<Object>",
        method: "getCourseStats",
        params: "@PathVariable Integer courseId",
        prelude: None,
        call_args: "courseId",
    },
];

/// Compile [`TEACHER_CONTROLLER_ENDPOINTS`] into rules, preserving order.
pub fn teacher_controller_rules() -> Result<Vec<PatchRule>, RuleError> {
    TEACHER_CONTROLLER_ENDPOINTS
        .iter()
        .map(|endpoint| endpoint.to_rule())
        .collect()
}
