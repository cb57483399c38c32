//! User-facing texts of the admin pages, parameterised by the entity noun.

pub fn load_failed(noun: &str) -> String {
    format!("Không thể tải danh sách {noun}. Vui lòng thử lại sau.")
}

pub fn load_trash_failed(noun: &str) -> String {
    format!("Không thể tải danh sách {noun} trong thùng rác. Vui lòng thử lại sau.")
}

pub fn load_detail_failed(noun: &str) -> String {
    format!("Không thể tải chi tiết {noun}.")
}

pub const LOAD_FORM_FAILED: &str = "Không thể tải dữ liệu.";

pub const STATUS_UPDATED: &str = "Cập nhật trạng thái thành công!";
pub const STATUS_FAILED: &str = "Có lỗi xảy ra khi cập nhật trạng thái. Vui lòng thử lại.";

pub fn select_at_least_one(noun: &str) -> String {
    format!("Vui lòng chọn ít nhất một {noun}")
}

pub fn confirm_trash_one(noun: &str) -> String {
    format!("Bạn có chắc chắn muốn chuyển {noun} này vào thùng rác?")
}

pub fn confirm_trash_many(count: usize, noun: &str) -> String {
    format!("Bạn có chắc chắn muốn chuyển {count} {noun} vào thùng rác?")
}

pub fn trashed(noun: &str) -> String {
    format!("Chuyển {noun} vào thùng rác thành công!")
}

pub const TRASH_FAILED: &str = "Có lỗi xảy ra khi chuyển vào thùng rác. Vui lòng thử lại.";

pub fn confirm_restore_one(noun: &str) -> String {
    format!("Bạn có chắc chắn muốn khôi phục {noun} này?")
}

pub fn confirm_restore_many(count: usize, noun: &str) -> String {
    format!("Bạn có chắc chắn muốn khôi phục {count} {noun}?")
}

pub fn restored(noun: &str) -> String {
    format!("Khôi phục {noun} thành công!")
}

pub const RESTORE_FAILED: &str = "Có lỗi xảy ra khi khôi phục. Vui lòng thử lại.";

pub fn confirm_delete_one(noun: &str) -> String {
    format!("Bạn có chắc chắn muốn xóa vĩnh viễn {noun} này? Hành động này không thể hoàn tác!")
}

pub fn confirm_delete_many(count: usize, noun: &str) -> String {
    format!(
        "Bạn có chắc chắn muốn xóa vĩnh viễn {count} {noun}? Hành động này không thể hoàn tác!"
    )
}

pub fn confirm_empty_trash(noun: &str) -> String {
    format!(
        "Bạn có chắc chắn muốn xóa vĩnh viễn tất cả {noun} trong thùng rác? Hành động này không thể hoàn tác!"
    )
}

pub fn deleted(noun: &str) -> String {
    format!("Xóa {noun} thành công!")
}

pub const DELETE_FAILED: &str = "Có lỗi xảy ra khi xóa. Vui lòng thử lại.";

pub const TRASH_EMPTIED: &str = "Đã dọn sạch thùng rác!";

pub const REQUIRED_FIELDS: &str = "Vui lòng điền đầy đủ thông tin bắt buộc.";

pub fn created(noun: &str) -> String {
    format!("Thêm {noun} thành công!")
}

pub fn create_failed(noun: &str) -> String {
    format!("Có lỗi xảy ra khi thêm {noun}. Vui lòng thử lại.")
}

pub fn updated(noun: &str) -> String {
    format!("Cập nhật {noun} thành công!")
}

pub fn update_failed(noun: &str) -> String {
    format!("Có lỗi xảy ra khi cập nhật {noun}. Vui lòng thử lại.")
}

pub const DASHBOARD_FAILED: &str = "Không thể tải dữ liệu. Vui lòng thử lại sau.";

/// Shown for a relation that could not be resolved.
pub const NOT_AVAILABLE: &str = "N/A";
