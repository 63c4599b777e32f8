//! Report catalogue
//!
//! SQL heads and tails are static text; the only request input that reaches
//! a statement is the optional year range, and it is always bound.

use super::{Messages, OnEmpty, Report};

const YEAR: Option<&str> = Some("t.año");

// ── Time ──

pub static VENTAS_POR_DIA: Report = Report {
    name: "totalVentasPorDia",
    select: "SELECT DATE_FORMAT(t.fecha, '%Y-%m-%d') AS dia, SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: None,
    tail: "GROUP BY t.fecha ORDER BY t.fecha",
    messages: Messages {
        ok: "Estadísticas de ventas por día obtenidas correctamente.",
        empty: "No se encontraron estadisticas de ventas.",
        failed: "Ha ocurrido un error al obtener  las estadisticas de ventas.",
    },
    on_empty: OnEmpty::NotFound,
    error_detail: true,
};

pub static VENTAS_POR_MES: Report = Report {
    name: "totalVentasPorMes",
    select: "SELECT t.mes, ROUND(SUM(hv.total_linea), 1) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY t.mes ORDER BY t.mes",
    messages: Messages {
        ok: "Estadísticas de ventas por mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por mes.",
        failed: "Error al obtener las estadísticas de ventas por mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_ANIO: Report = Report {
    name: "totalVentasPorAnio",
    select: "SELECT t.año, ROUND(SUM(hv.total_linea), 2) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: None,
    tail: "GROUP BY t.año ORDER BY t.año",
    messages: Messages {
        ok: "Estadísticas de ventas por año obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por año.",
        failed: "Error al obtener las estadísticas de ventas por año.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_DIA_SEMANA: Report = Report {
    name: "totalVentasPorDiaSemana",
    select: "SELECT t.dia_semana, SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: None,
    tail: "GROUP BY t.dia_semana ORDER BY total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por día de la semana obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por día de la semana.",
        failed: "Error al obtener las estadísticas de ventas por día de la semana.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

// ── Employees ──

pub static VENTAS_POR_EMPLEADO: Report = Report {
    name: "totalVentasPorEmpleado",
    select: "SELECT e.primer_nombre, e.segundo_nombre, e.primer_apellido, \
             ROUND(SUM(hv.total_linea), 2) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado",
    condition: None,
    year_column: None,
    tail: "GROUP BY e.id_empleado, e.primer_nombre, e.segundo_nombre, e.primer_apellido \
           ORDER BY total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por empleado obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por empleado.",
        failed: "Error al obtener las estadísticas de ventas por empleado.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static CANTIDAD_VENTAS_POR_EMPLEADO: Report = Report {
    name: "cantidadVentasPorEmpleado",
    select: "SELECT e.primer_nombre, e.segundo_nombre, e.primer_apellido, \
             COUNT(DISTINCT hv.id_venta) AS cantidad_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado",
    condition: None,
    year_column: None,
    tail: "GROUP BY e.id_empleado, e.primer_nombre, e.segundo_nombre, e.primer_apellido \
           ORDER BY cantidad_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de cantidad de ventas por empleado obtenidas correctamente.",
        empty: "No se encontraron estadísticas de cantidad de ventas por empleado.",
        failed: "Error al obtener las estadísticas de cantidad de ventas por empleado.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_EMPLEADO_Y_MES: Report = Report {
    name: "totalVentasPorEmpleadoYMes",
    select: "SELECT e.primer_nombre, e.segundo_nombre, e.primer_apellido, t.año, t.mes, \
             SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY e.id_empleado, e.primer_nombre, e.segundo_nombre, e.primer_apellido, t.año, t.mes \
           ORDER BY t.año, t.mes, total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por empleado y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por empleado y mes.",
        failed: "Error al obtener las estadísticas de ventas por empleado y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static PROMEDIO_VENTAS_POR_EMPLEADO: Report = Report {
    name: "promedioVentasPorEmpleado",
    select: "SELECT e.primer_nombre, e.segundo_nombre, e.primer_apellido, \
             AVG(hv.total_linea) AS promedio_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado",
    condition: None,
    year_column: None,
    tail: "GROUP BY e.id_empleado, e.primer_nombre, e.segundo_nombre, e.primer_apellido \
           ORDER BY promedio_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de promedio de ventas por empleado obtenidas correctamente.",
        empty: "No se encontraron estadísticas de promedio de ventas por empleado.",
        failed: "Error al obtener las estadísticas de promedio de ventas por empleado.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static PROMEDIO_VENTAS_POR_EMPLEADO_Y_MES: Report = Report {
    name: "promedioVentasPorEmpleadoYMes",
    select: "SELECT e.primer_nombre, e.segundo_nombre, e.primer_apellido, \
             t.año, t.mes, AVG(hv.total_linea) AS promedio_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY e.id_empleado, e.primer_nombre, e.segundo_nombre, e.primer_apellido, t.año, t.mes \
           ORDER BY t.año, t.mes, promedio_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de promedio de ventas por empleado y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de promedio de ventas por empleado y mes.",
        failed: "Error al obtener las estadísticas de promedio de ventas por empleado y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

// ── Customers ──

pub static COMPRAS_POR_CLIENTE: Report = Report {
    name: "totalComprasPorCliente",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
             ROUND(SUM(hv.total_linea), 2) AS total_compras \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente",
    condition: None,
    year_column: None,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido \
           ORDER BY total_compras DESC",
    messages: Messages {
        ok: "Estadísticas de compras por cliente obtenidas correctamente.",
        empty: "No se encontraron estadísticas de compras por cliente.",
        failed: "Error al obtener las estadísticas de compras por cliente.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static CANTIDAD_COMPRAS_POR_CLIENTE: Report = Report {
    name: "cantidadComprasPorCliente",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
             COUNT(DISTINCT hv.id_venta) AS cantidad_compras \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente",
    condition: None,
    year_column: None,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido \
           ORDER BY cantidad_compras DESC",
    messages: Messages {
        ok: "Estadísticas de cantidad de compras por cliente obtenidas correctamente.",
        empty: "No se encontraron estadísticas de cantidad de compras por cliente.",
        failed: "Error al obtener las estadísticas de cantidad de compras por cliente.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static COMPRAS_POR_CLIENTE_Y_MES: Report = Report {
    name: "totalComprasPorClienteYMes",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, t.año, t.mes, \
             SUM(hv.total_linea) AS total_compras \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido, t.año, t.mes \
           ORDER BY t.año, t.mes, total_compras DESC",
    messages: Messages {
        ok: "Estadísticas de compras por cliente y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de compras por cliente y mes.",
        failed: "Error al obtener las estadísticas de compras por cliente y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static CLIENTES_FRECUENTES: Report = Report {
    name: "clientesFrecuentes",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
             COUNT(DISTINCT hv.id_venta) AS cantidad_compras, \
             SUM(hv.total_linea) AS total_compras \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente",
    condition: None,
    year_column: None,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido \
           HAVING COUNT(DISTINCT hv.id_venta) > 1 \
           ORDER BY cantidad_compras DESC",
    messages: Messages {
        ok: "Estadísticas de clientes frecuentes obtenidas correctamente.",
        empty: "No se encontraron clientes frecuentes.",
        failed: "Error al obtener las estadísticas de clientes frecuentes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static CLIENTES_FRECUENTES_POR_MES: Report = Report {
    name: "clientesFrecuentesPorMes",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
             t.año, t.mes, COUNT(DISTINCT hv.id_venta) AS cantidad_compras \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido, t.año, t.mes \
           HAVING COUNT(DISTINCT hv.id_venta) > 1 \
           ORDER BY t.año, t.mes, cantidad_compras DESC",
    messages: Messages {
        ok: "Estadísticas de clientes frecuentes por mes obtenidas correctamente.",
        empty: "No se encontraron clientes frecuentes por mes.",
        failed: "Error al obtener las estadísticas de clientes frecuentes por mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static PRODUCTOS_POR_CLIENTE: Report = Report {
    name: "productosMasCompradosPorCliente",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
             p.nombre_producto, SUM(hv.cantidad) AS cantidad_comprada, \
             SUM(hv.total_linea) AS total_gastado \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: None,
    year_column: None,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
           p.id_producto, p.nombre_producto \
           ORDER BY total_gastado DESC",
    messages: Messages {
        ok: "Estadísticas de productos comprados por cliente obtenidas correctamente.",
        empty: "No se encontraron estadísticas de productos comprados por cliente.",
        failed: "Error al obtener las estadísticas de productos comprados por cliente.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static CATEGORIAS_POR_CLIENTE: Report = Report {
    name: "categoriasMasCompradasPorCliente",
    select: "SELECT c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
             p.nombre_categoria, SUM(hv.cantidad) AS cantidad_comprada, \
             SUM(hv.total_linea) AS total_gastado \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: None,
    year_column: None,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.segundo_nombre, c.primer_apellido, \
           p.nombre_categoria \
           ORDER BY total_gastado DESC",
    messages: Messages {
        ok: "Estadísticas de categorías compradas por cliente obtenidas correctamente.",
        empty: "No se encontraron estadísticas de categorías compradas por cliente.",
        failed: "Error al obtener las estadísticas de categorías compradas por cliente.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

// ── Products & categories ──

pub static PRODUCTOS_POR_CANTIDAD: Report = Report {
    name: "productosMasVendidosPorCantidad",
    select: "SELECT p.nombre_producto, SUM(hv.cantidad) AS cantidad_vendida \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: None,
    year_column: None,
    tail: "GROUP BY p.id_producto, p.nombre_producto ORDER BY cantidad_vendida DESC",
    messages: Messages {
        ok: "Estadísticas de productos más vendidos por cantidad obtenidas correctamente.",
        empty: "No se encontraron estadísticas de productos más vendidos por cantidad.",
        failed: "Error al obtener las estadísticas de productos más vendidos por cantidad.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static PRODUCTOS_POR_VALOR: Report = Report {
    name: "productosMasVendidosPorValor",
    select: "SELECT p.nombre_producto, SUM(hv.total_linea) AS total_ventas, \
             SUM(hv.cantidad) AS cantidad_vendida \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: None,
    year_column: None,
    tail: "GROUP BY p.id_producto, p.nombre_producto ORDER BY total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de productos más vendidos por valor obtenidas correctamente.",
        empty: "No se encontraron estadísticas de productos más vendidos por valor.",
        failed: "Error al obtener las estadísticas de productos más vendidos por valor.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_PRODUCTOS_POR_MES: Report = Report {
    name: "ventasProductosPorMes",
    select: "SELECT p.nombre_producto, t.año, t.mes, SUM(hv.cantidad) AS cantidad_vendida, \
             SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY p.id_producto, p.nombre_producto, t.año, t.mes \
           ORDER BY t.año, t.mes, total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas de productos por mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas de productos por mes.",
        failed: "Error al obtener las estadísticas de ventas de productos por mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_CATEGORIA: Report = Report {
    name: "totalVentasPorCategoria",
    select: "SELECT p.nombre_categoria, SUM(hv.total_linea) AS total_ventas, \
             SUM(hv.cantidad) AS cantidad_vendida \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: None,
    year_column: None,
    tail: "GROUP BY p.nombre_categoria ORDER BY total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por categoría obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por categoría.",
        failed: "Error al obtener las estadísticas de ventas por categoría.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_CATEGORIA_Y_MES: Report = Report {
    name: "totalVentasPorCategoriaYMes",
    select: "SELECT p.nombre_categoria, t.año, t.mes, SUM(hv.total_linea) AS total_ventas, \
             SUM(hv.cantidad) AS cantidad_vendida \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY p.nombre_categoria, t.año, t.mes \
           ORDER BY t.año, t.mes, total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por categoría y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por categoría y mes.",
        failed: "Error al obtener las estadísticas de ventas por categoría y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_CATEGORIA_Y_DIA_SEMANA: Report = Report {
    name: "ventasPorCategoriaYDiaSemana",
    select: "SELECT p.nombre_categoria, t.dia_semana, SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: None,
    tail: "GROUP BY p.nombre_categoria, t.dia_semana ORDER BY total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por categoría y día de la semana obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por categoría y día de la semana.",
        failed: "Error al obtener las estadísticas de ventas por categoría y día de la semana.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static PRODUCTOS_BAJO_STOCK: Report = Report {
    name: "productosBajoStock",
    select: "SELECT p.nombre_producto, p.stock FROM Dim_Productos p",
    condition: Some("p.stock < 50"),
    year_column: None,
    tail: "ORDER BY p.stock ASC",
    messages: Messages {
        ok: "Productos con bajo stock obtenidos correctamente.",
        empty: "No se encontraron productos con bajo stock.",
        failed: "Error al obtener los productos con bajo stock.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static STOCK_POR_CATEGORIA: Report = Report {
    name: "stockPorCategoria",
    select: "SELECT p.nombre_categoria, SUM(p.stock) AS stock_total FROM Dim_Productos p",
    condition: None,
    year_column: None,
    tail: "GROUP BY p.nombre_categoria ORDER BY stock_total DESC",
    messages: Messages {
        ok: "Estadísticas de stock por categoría obtenidas correctamente.",
        empty: "No se encontraron estadísticas de stock por categoría.",
        failed: "Error al obtener las estadísticas de stock por categoría.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static PRODUCTOS_MAYOR_ROTACION: Report = Report {
    name: "productosMayorRotacion",
    select: "SELECT p.nombre_producto, p.stock AS stock_inicial, \
             SUM(hv.cantidad) AS total_vendido, \
             (SUM(hv.cantidad) / p.stock) AS tasa_rotacion \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: Some("p.stock > 0"),
    year_column: None,
    tail: "GROUP BY p.id_producto, p.nombre_producto, p.stock ORDER BY tasa_rotacion DESC",
    messages: Messages {
        ok: "Estadísticas de rotación de productos obtenidas correctamente.",
        empty: "No se encontraron estadísticas de rotación de productos.",
        failed: "Error al obtener las estadísticas de rotación de productos.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static CATEGORIAS_MAYOR_ROTACION: Report = Report {
    name: "categoriasMayorRotacion",
    select: "SELECT p.nombre_categoria, SUM(p.stock) AS stock_total, \
             SUM(hv.cantidad) AS total_vendido, \
             (SUM(hv.cantidad) / SUM(p.stock)) AS tasa_rotacion \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto",
    condition: None,
    year_column: None,
    tail: "GROUP BY p.nombre_categoria HAVING SUM(p.stock) > 0 ORDER BY tasa_rotacion DESC",
    messages: Messages {
        ok: "Estadísticas de rotación de categorías obtenidas correctamente.",
        empty: "No se encontraron estadísticas de rotación de categorías.",
        failed: "Error al obtener las estadísticas de rotación de categorías.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

// ── Cross dimensions ──

pub static VENTAS_POR_CLIENTE_EMPLEADO_Y_MES: Report = Report {
    name: "ventasPorClienteEmpleadoYMes",
    select: "SELECT c.primer_nombre AS cliente_nombre, c.primer_apellido AS cliente_apellido, \
             e.primer_nombre AS empleado_nombre, e.primer_apellido AS empleado_apellido, \
             t.año, t.mes, SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.primer_apellido, \
           e.id_empleado, e.primer_nombre, e.primer_apellido, t.año, t.mes \
           ORDER BY t.año, t.mes, total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por cliente, empleado y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por cliente, empleado y mes.",
        failed: "Error al obtener las estadísticas de ventas por cliente, empleado y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_CATEGORIA_EMPLEADO_Y_MES: Report = Report {
    name: "ventasPorCategoriaEmpleadoYMes",
    select: "SELECT p.nombre_categoria, e.primer_nombre AS empleado_nombre, \
             e.primer_apellido AS empleado_apellido, \
             t.año, t.mes, SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto \
             JOIN Dim_Empleados e ON hv.id_empleado = e.id_empleado \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY p.nombre_categoria, e.id_empleado, e.primer_nombre, e.primer_apellido, t.año, t.mes \
           ORDER BY t.año, t.mes, total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por categoría, empleado y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por categoría, empleado y mes.",
        failed: "Error al obtener las estadísticas de ventas por categoría, empleado y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

pub static VENTAS_POR_CLIENTE_CATEGORIA_Y_MES: Report = Report {
    name: "ventasPorClienteCategoriaYMes",
    select: "SELECT c.primer_nombre AS cliente_nombre, c.primer_apellido AS cliente_apellido, \
             p.nombre_categoria, t.año, t.mes, SUM(hv.total_linea) AS total_ventas \
             FROM Hecho_Ventas hv \
             JOIN Dim_Clientes c ON hv.id_cliente = c.id_cliente \
             JOIN Dim_Productos p ON hv.id_producto = p.id_producto \
             JOIN Dim_Tiempo t ON hv.fecha = t.fecha",
    condition: None,
    year_column: YEAR,
    tail: "GROUP BY c.id_cliente, c.primer_nombre, c.primer_apellido, \
           p.nombre_categoria, t.año, t.mes \
           ORDER BY t.año, t.mes, total_ventas DESC",
    messages: Messages {
        ok: "Estadísticas de ventas por cliente, categoría y mes obtenidas correctamente.",
        empty: "No se encontraron estadísticas de ventas por cliente, categoría y mes.",
        failed: "Error al obtener las estadísticas de ventas por cliente, categoría y mes.",
    },
    on_empty: OnEmpty::EmptyData,
    error_detail: false,
};

/// Every report, in route order
pub static ALL: [&Report; 29] = [
    &VENTAS_POR_DIA,
    &VENTAS_POR_MES,
    &VENTAS_POR_ANIO,
    &VENTAS_POR_EMPLEADO,
    &CANTIDAD_VENTAS_POR_EMPLEADO,
    &VENTAS_POR_EMPLEADO_Y_MES,
    &COMPRAS_POR_CLIENTE,
    &CANTIDAD_COMPRAS_POR_CLIENTE,
    &COMPRAS_POR_CLIENTE_Y_MES,
    &PRODUCTOS_POR_CANTIDAD,
    &PRODUCTOS_POR_VALOR,
    &VENTAS_PRODUCTOS_POR_MES,
    &VENTAS_POR_CATEGORIA,
    &VENTAS_POR_CATEGORIA_Y_MES,
    &PRODUCTOS_BAJO_STOCK,
    &STOCK_POR_CATEGORIA,
    &VENTAS_POR_CLIENTE_EMPLEADO_Y_MES,
    &VENTAS_POR_CATEGORIA_EMPLEADO_Y_MES,
    &VENTAS_POR_CLIENTE_CATEGORIA_Y_MES,
    &PROMEDIO_VENTAS_POR_EMPLEADO,
    &PROMEDIO_VENTAS_POR_EMPLEADO_Y_MES,
    &CLIENTES_FRECUENTES,
    &CLIENTES_FRECUENTES_POR_MES,
    &PRODUCTOS_POR_CLIENTE,
    &CATEGORIAS_POR_CLIENTE,
    &VENTAS_POR_DIA_SEMANA,
    &VENTAS_POR_CATEGORIA_Y_DIA_SEMANA,
    &PRODUCTOS_MAYOR_ROTACION,
    &CATEGORIAS_MAYOR_ROTACION,
];
